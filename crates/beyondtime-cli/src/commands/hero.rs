use clap::Args;

use beyondtime_core::hero::{
    layer_offsets, pointer_offset, HEADLINE, PRIMARY_CTA, SECONDARY_CTA, TAGLINE,
};

use super::{print_json, CmdResult};

#[derive(Args)]
pub struct HeroArgs {
    /// Pointer position `X,Y` in px; prints parallax offsets
    #[arg(long, value_parser = parse_pair)]
    pointer: Option<(f64, f64)>,
    /// Viewport size `W,H` in px
    #[arg(long, value_parser = parse_pair, default_value = "1280,800")]
    viewport: (f64, f64),
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got '{s}'"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}"));
    Ok((parse(a)?, parse(b)?))
}

pub fn run(args: HeroArgs) -> CmdResult {
    match args.pointer {
        None => {
            println!("{HEADLINE}\n");
            println!("{TAGLINE}\n");
            println!("[ {PRIMARY_CTA} ]   {SECONDARY_CTA}");
            Ok(())
        }
        Some((x, y)) => {
            let (w, h) = args.viewport;
            let offset = pointer_offset(x, y, w, h);
            print_json(&serde_json::json!({
                "pointer": offset,
                "layers": layer_offsets(offset),
            }))
        }
    }
}
