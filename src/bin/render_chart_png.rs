#[cfg(feature = "cairo-backend")]
use graph_rs::api::{ChartEngine, ChartEngineConfig, ChartSpec};
#[cfg(feature = "cairo-backend")]
use graph_rs::core::Viewport;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 800;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 600;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    spec_path: PathBuf,
    output_path: PathBuf,
    width: u32,
    height: u32,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = graph_rs::telemetry::init_default_tracing();
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
    use graph_rs::render::CairoRenderer;

    let args = parse_args()?;
    let raw = fs::read_to_string(&args.spec_path).map_err(|err| {
        format!(
            "failed to read chart spec `{}`: {err}",
            args.spec_path.display()
        )
    })?;
    let spec = ChartSpec::from_json_str(&raw).map_err(|err| err.to_string())?;

    let width = i32::try_from(args.width).map_err(|_| "width overflows i32".to_owned())?;
    let height = i32::try_from(args.height).map_err(|_| "height overflows i32".to_owned())?;
    let renderer =
        CairoRenderer::new(width, height).map_err(|err| format!("renderer init failed: {err}"))?;
    let config = ChartEngineConfig::new(Viewport::new(args.width, args.height));
    let mut engine =
        ChartEngine::new(renderer, config).map_err(|err| format!("engine init failed: {err}"))?;

    engine
        .render(spec)
        .map_err(|err| format!("render failed: {err}"))?;
    let renderer = engine.into_renderer();
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "rendered {} ({} paths, {} rects, {} circles, {} texts)",
        args.output_path.display(),
        stats.paths_drawn,
        stats.rects_drawn,
        stats.circles_drawn,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut spec_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from("chart.png");
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--spec" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --spec".to_owned())?;
                spec_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => width = parse_dimension(args.next(), "--width")?,
            "--height" => height = parse_dimension(args.next(), "--height")?,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let spec_path = spec_path.ok_or_else(|| format!("--spec is required\n\n{}", usage_message()))?;
    Ok(CliArgs {
        spec_path,
        output_path,
        width,
        height,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --spec <path> [options]\n\nOptions:\n  --spec <path>      Chart spec JSON file\n  --output <path>    Output PNG path (default: chart.png)\n  --width <px>       Canvas width (default: {DEFAULT_WIDTH})\n  --height <px>      Canvas height (default: {DEFAULT_HEIGHT})\n  -h, --help         Show this message"
    )
}
