#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "plot.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: i32 = 400;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: i32 = 300;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    width: i32,
    height: i32,
    functions: Vec<String>,
    points: Vec<f64>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use fngraph::render::{CairoSurface, Color};
    use fngraph::{GraphTrace, Plotter};

    let _ = fngraph::telemetry::init_default_tracing();
    let args = parse_args()?;

    let overrides = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            serde_json::from_str(&raw)
                .map_err(|err| format!("failed to parse config json: {err}"))?
        }
        None => serde_json::Value::Null,
    };

    let functions = args
        .functions
        .iter()
        .map(|name| builtin_function(name).ok_or_else(|| format!("unknown function `{name}`")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut surface = CairoSurface::new(args.width, args.height)
        .map_err(|err| format!("surface init failed: {err}"))?;
    surface
        .clear(Color::WHITE)
        .map_err(|err| format!("surface clear failed: {err}"))?;

    let mut plotter = Plotter::with_overrides(&mut surface, &overrides)
        .map_err(|err| format!("invalid configuration: {err}"))?;
    plotter
        .draw_axes()
        .map_err(|err| format!("axis draw failed: {err}"))?;

    let traces: Vec<GraphTrace<'_>> = functions
        .iter()
        .enumerate()
        .map(|(index, function)| {
            let trace = GraphTrace::new(function.as_ref());
            match palette_color(index) {
                Some(color) => trace.with_stroke_color(color),
                None => trace,
            }
        })
        .collect();
    let samples = plotter
        .draw_graphs(&traces)
        .map_err(|err| format!("graph draw failed: {err}"))?;

    if let Some(first) = functions.first() {
        for &value in &args.points {
            if let Err(err) = plotter.draw_plotted_value(first.as_ref(), value) {
                eprintln!("skipping point {value}: {err}");
            }
        }
    }

    if let Some(parent) = args.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create output dir `{}`: {err}", parent.display()))?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    surface
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;

    println!(
        "rendered {} function(s), {samples} sample(s) -> {}",
        traces.len(),
        args.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn builtin_function(name: &str) -> Option<Box<dyn Fn(f64) -> f64>> {
    let function: Box<dyn Fn(f64) -> f64> = match name {
        "identity" => Box::new(|x| x),
        "square" => Box::new(|x| x * x),
        "cube" => Box::new(|x| x * x * x),
        "abs" => Box::new(f64::abs),
        "sin" => Box::new(f64::sin),
        "cos" => Box::new(f64::cos),
        "tanh" => Box::new(f64::tanh),
        "exp" => Box::new(f64::exp),
        _ => return None,
    };
    Some(function)
}

/// First trace keeps `graph.stroke_color`; later ones cycle through a palette.
#[cfg(feature = "cairo-backend")]
fn palette_color(index: usize) -> Option<fngraph::render::Color> {
    use fngraph::render::Color;

    const PALETTE: [(u8, u8, u8); 4] = [
        (0x21, 0x96, 0xf3),
        (0xff, 0x98, 0x00),
        (0x9c, 0x27, 0xb0),
        (0x79, 0x55, 0x48),
    ];
    index
        .checked_sub(1)
        .map(|slot| PALETTE[slot % PALETTE.len()])
        .map(|(red, green, blue)| Color::from_rgb8(red, green, blue))
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut functions = Vec::new();
    let mut points = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--output" => output_path = PathBuf::from(value_for("--output")?),
            "--config" => config_path = Some(PathBuf::from(value_for("--config")?)),
            "--width" => width = parse_number(&value_for("--width")?, "--width")?,
            "--height" => height = parse_number(&value_for("--height")?, "--height")?,
            "--function" => functions.push(value_for("--function")?),
            "--point" => points.push(parse_number(&value_for("--point")?, "--point")?),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    if functions.is_empty() {
        functions.push("sin".to_owned());
    }

    Ok(CliArgs {
        output_path,
        config_path,
        width,
        height,
        functions,
        points,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value `{raw}` for {flag}"))
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_plot_png -- [options]\n\nOptions:\n  --output <path>     PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --config <path>     JSON file with partial configuration overrides\n  --width <px>        Surface width (default: {DEFAULT_WIDTH})\n  --height <px>       Surface height (default: {DEFAULT_HEIGHT})\n  --function <name>   identity, square, cube, abs, sin, cos, tanh, exp (repeatable, default: sin)\n  --point <value>     Marker on the first function (repeatable)\n  -h, --help          Show this message"
    )
}
