use std::process::{Command, ExitStatus};

use anyhow::{anyhow, bail, Context, Result};

/// Run a command without capturing anything, returning its status.
pub fn run(cmd: &str, args: &[&str]) -> Result<ExitStatus> {
    Command::new(cmd)
        .args(args)
        .status()
        .with_context(|| anyhow!("run({cmd:?}, {args:?})"))
}

/// Run a command without capturing anything, treating any non-0
/// status as an error.
pub fn xrun(cmd: &str, args: &[&str]) -> Result<()> {
    let status = run(cmd, args)?;
    if status.success() {
        Ok(())
    } else {
        bail!("run({cmd:?}, {args:?}) gave {}", status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_xrun() {
        assert!(xrun("true", &[]).is_ok());
        assert!(xrun("false", &[]).is_err());
        assert!(xrun("/no/such/program", &[]).is_err());
    }
}
