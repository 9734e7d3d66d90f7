use clap::Args;

use beyondtime_core::particles::MAX_PARTICLE_COUNT;
use beyondtime_core::{Config, ParticleField};

use super::{print_json, CmdResult};

#[derive(Args)]
pub struct ParticlesArgs {
    /// PRNG seed (default: from config)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of particles (default: from config)
    #[arg(long)]
    count: Option<usize>,
}

pub fn run(args: ParticlesArgs) -> CmdResult {
    let config = Config::load_or_default();
    let count = args.count.unwrap_or(config.particles.count);
    if count > MAX_PARTICLE_COUNT {
        return Err(format!("--count must be at most {MAX_PARTICLE_COUNT}, got {count}").into());
    }
    let field = ParticleField::generate(args.seed.unwrap_or(config.particles.seed), count);
    print_json(&field)
}
