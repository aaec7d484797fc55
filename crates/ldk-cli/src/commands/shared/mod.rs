mod kv;

pub use kv::parse_kv;

use ldk_views::{Outcome, Phase};

/// Turn a controller's settled phase into a command result. Controllers log
/// the underlying transport error themselves; the CLI only needs the exit
/// code.
pub fn ensure_success(phase: Phase) -> anyhow::Result<()> {
    match phase {
        Phase::Settled(Outcome::Success) => Ok(()),
        Phase::Settled(Outcome::Error) => anyhow::bail!("request failed"),
        Phase::Idle | Phase::Loading => anyhow::bail!("request was not issued"),
    }
}
