// daybreak-core/src/host.rs
use daybreak_common::config::Config;
use daybreak_common::error::{DaybreakError, Result};
use tracing::debug;

/// Returns the machine's network hostname.
pub fn hostname() -> Result<String> {
    let name = gethostname::gethostname().into_string().map_err(|raw| {
        DaybreakError::Hostname(format!("hostname is not valid UTF-8: {raw:?}"))
    })?;
    if name.is_empty() {
        return Err(DaybreakError::Hostname("empty hostname".to_string()));
    }
    Ok(name)
}

/// The hostname used to pick a command list: the configured override, else the system hostname.
pub fn effective_hostname(config: &Config) -> Result<String> {
    match &config.hostname_override {
        Some(name) => {
            debug!("Using hostname override '{}'", name);
            Ok(name.clone())
        }
        None => hostname(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn system_hostname_is_non_empty() {
        let name = hostname().unwrap();
        assert!(!name.is_empty());
        assert!(!name.contains('\0'));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn system_hostname_matches_the_kernel() {
        let kernel = std::fs::read_to_string("/proc/sys/kernel/hostname").unwrap();
        assert_eq!(hostname().unwrap(), kernel.trim());
    }

    #[test]
    fn override_wins_over_system_hostname() {
        let config = Config {
            home_dir: PathBuf::from("/tmp"),
            shell: PathBuf::from("/bin/sh"),
            hostname_override: Some("PADDO".to_string()),
        };
        assert_eq!(effective_hostname(&config).unwrap(), "PADDO");
    }
}
