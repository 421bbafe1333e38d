//! Render highlighted, wrapped text as an SVG document on stdout.
//!
//! ```text
//! RUST_LOG=hlpath=debug cargo run --example render_svg --features tracing -- padding=6 cornerRadius=8
//! ```
//!
//! Each argument is a `name=value` property; see `Config::from_props`.

use hlpath::{Highlighter, StaticHost, SvgSurface};
use tracing_subscriber::EnvFilter;

/// One paragraph, already wrapped. The trailing `'\n'` is a hard break.
const TEXT: &[&str] = &[
    "Highlighted text keeps one ",
    "smooth background across ",
    "wrapped lines, but a  double ",
    "space or a hard break\n",
    "starts a new shape.",
];

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let props = args.iter().filter_map(|arg| arg.split_once('='));
    let config = hlpath::Config::from_props(props)?;

    let host = StaticHost::wrapped(TEXT, 9.0, 22.0, config);
    let mut highlighter = Highlighter::new();
    let mut surface = SvgSurface::new();
    let contours = highlighter.draw(&host, &mut surface);
    tracing::info!(contours, "rendered highlight");

    let view_box = highlighter
        .paths(&host)
        .iter()
        .filter_map(|p| p.bounds())
        .chain(host.layout.lines.iter().map(|l| l.bounds))
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default();

    println!("{}", surface.finish(view_box)?);
    Ok(())
}
