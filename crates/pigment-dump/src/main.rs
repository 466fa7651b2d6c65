use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use pigment_ops::clip::RectClip;
use pigment_ops::coords::{IRect, Rect, Vec2};
use pigment_ops::logging::{init_logging, LoggingConfig};
use pigment_ops::ops::{Op, Ops, Reader};
use pigment_ops::paint::{
    fill, fill_shape, paint_rect, Brush, Color, ImageOp, ImageSource, LinearGradientOp, RgbaBuffer,
};

const USAGE: &str =
    "usage: pigment-dump [--image <path>] [--background <RRGGBBAA>] [--hex] [--log <filter>]";

const DEFAULT_BACKGROUND: Color = Color::rgb(0x20, 0x22, 0x28);

/// Command-line options.
#[derive(Debug, Default)]
struct DumpConfig {
    /// Bitmap to encode; a generated checkerboard is used when absent.
    image: Option<PathBuf>,
    background: Option<Color>,
    /// Print each record's raw bytes.
    hex: bool,
    log_filter: Option<String>,
}

impl DumpConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = DumpConfig::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--image" => {
                    let path = args.next().context("--image needs a path")?;
                    config.image = Some(PathBuf::from(path));
                }
                "--background" => {
                    let hex = args.next().context("--background needs a color")?;
                    config.background = Some(parse_color(&hex)?);
                }
                "--hex" => config.hex = true,
                "--log" => {
                    config.log_filter = Some(args.next().context("--log needs a filter")?);
                }
                "-h" | "--help" => {
                    println!("{USAGE}");
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}'\n{USAGE}"),
            }
        }
        Ok(config)
    }
}

/// Parses `RRGGBBAA`, with or without a leading `#`.
fn parse_color(s: &str) -> Result<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 8 {
        bail!("color '{s}' must have 8 hex digits (RRGGBBAA)");
    }
    let packed = u32::from_str_radix(digits, 16)
        .with_context(|| format!("color '{s}' is not hexadecimal"))?;
    Ok(Color::from_packed(packed))
}

fn main() -> Result<()> {
    let config = DumpConfig::from_args(std::env::args().skip(1))?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        timestamps: false,
        ..LoggingConfig::default()
    });

    let source = load_source(&config)?;
    let image = ImageOp::new(&source);
    log::info!(
        "image brush: size {:?}, handle {:?}",
        image.size(),
        image.handle()
    );

    let mut ops = Ops::new();
    encode_frame(&mut ops, config.background.unwrap_or(DEFAULT_BACKGROUND), &image);
    log::info!(
        "encoded {} bytes, {} image attachment(s)",
        ops.len(),
        ops.refs().len()
    );

    dump(&ops, config.hex)
}

fn load_source(config: &DumpConfig) -> Result<ImageSource> {
    let Some(path) = &config.image else {
        return Ok(ImageSource::Rgba(Arc::new(checkerboard(8, 8))));
    };
    let img = image::open(path).with_context(|| format!("failed to load '{}'", path.display()))?;
    Ok(ImageSource::Dynamic(img))
}

fn checkerboard(w: i32, h: i32) -> RgbaBuffer {
    let mut buf = RgbaBuffer::new(IRect::from_size(w, h));
    for y in 0..h {
        for x in 0..w {
            let c = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
            buf.set_pixel(x, y, c);
        }
    }
    buf
}

/// Background, a clipped panel, a gradient bar and the image.
fn encode_frame(ops: &mut Ops, background: Color, image: &ImageOp) {
    fill(ops, background);

    let panel = RectClip::new(Rect::from_corners(16.0, 16.0, 304.0, 176.0));
    fill_shape(ops, Color::rgb(0x3A, 0x3F, 0x4B), &panel);

    let bar = LinearGradientOp::new(
        Vec2::new(32.0, 0.0),
        Color::rgb(0xE0, 0x40, 0x40),
        Vec2::new(288.0, 0.0),
        Color::rgb(0x40, 0x80, 0xE0),
    );
    paint_rect(ops, &bar.into(), Rect::from_corners(32.0, 32.0, 288.0, 48.0));

    let size = image.size();
    let dst = Rect::from_origin_size(
        Vec2::new(32.0, 64.0),
        Vec2::new(size.x as f32, size.y as f32),
    );
    paint_rect(ops, &Brush::Image(image.clone()), dst);
}

fn dump(ops: &Ops, hex: bool) -> Result<()> {
    let data = ops.data();
    let mut depth = 0usize;
    for record in Reader::new(ops) {
        let (offset, op) = record.context("op stream failed to decode")?;
        if matches!(op, Op::Pop) {
            depth = depth.saturating_sub(1);
        }

        let indent = "  ".repeat(depth);
        println!("{offset:>6}  {indent}{}", describe(&op));
        if hex {
            let bytes = &data[offset..offset + op.op_type().size()];
            let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
            println!("        {indent}  [{}]", hex.join(" "));
        }

        if matches!(op, Op::Push) {
            depth += 1;
        }
    }
    Ok(())
}

fn describe(op: &Op<'_>) -> String {
    match op {
        Op::Push => "push".to_string(),
        Op::Pop => "pop".to_string(),
        Op::Clip(r) => format!("clip {}", fmt_rect(*r)),
        Op::Color(c) => {
            let c = c.color;
            format!("color #{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
        Op::LinearGradient(g) => format!(
            "linear-gradient ({}, {}) #{:08x} -> ({}, {}) #{:08x}",
            g.stop1.x,
            g.stop1.y,
            g.color1.to_packed(),
            g.stop2.x,
            g.stop2.y,
            g.color2.to_packed()
        ),
        Op::Image {
            rect,
            image,
            handle,
        } => format!(
            "image {:?}..{:?} of {}x{} buffer, handle #{}",
            (rect.min.x, rect.min.y),
            (rect.max.x, rect.max.y),
            image.size().x,
            image.size().y,
            handle.id()
        ),
        Op::Paint(p) => format!("paint {}", fmt_rect(p.rect)),
    }
}

fn fmt_rect(r: Rect) -> String {
    format!("({}, {})..({}, {})", r.min.x, r.min.y, r.max.x, r.max.y)
}
