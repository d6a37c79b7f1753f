//! Which commands to launch on which machine.
use std::collections::HashMap;

use tracing::debug;

/// Host that only gets the reduced command set.
pub const REDUCED_HOST: &str = "paddo";

const REDUCED_COMMANDS: [&str; 4] = [
    "open -g -a /System/Applications/TextEdit.app ~/scratch.txt",
    "open -g /Applications/Ghostty.app",
    "open -g '/Applications/Zed.app'",
    "open -g '/Users/lsimons/Applications/IntelliJ IDEA Ultimate.app'",
];

const DEFAULT_COMMANDS: [&str; 11] = [
    "open -g -a /System/Applications/TextEdit.app ~/scratch.txt",
    "open -g /Applications/Ghostty.app",
    "open -g -a '/Applications/Brave Browser.app' 'https://schubergphilis.okta-emea.com/'",
    "open -g /Applications/Slack.app",
    "open -g '/Applications/Zed.app'",
    "open -g '/Applications/Microsoft Outlook.app'",
    "open -g '/Applications/Microsoft Teams.app'",
    "open -g '/Applications/Microsoft Word.app'",
    "open -g '/Applications/Microsoft Excel.app'",
    "open -g '/Applications/Microsoft PowerPoint.app'",
    "open -g '/Users/lsimons/Applications/IntelliJ IDEA Ultimate.app'",
];

/// Maps lowercase hostnames to the shell commands launched on that host.
/// Hosts without an entry get the default list.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    hosts: HashMap<String, Vec<String>>,
    default: Vec<String>,
}

impl LaunchTable {
    pub fn new(default: Vec<String>) -> Self {
        Self {
            hosts: HashMap::new(),
            default,
        }
    }

    pub fn with_host(mut self, host: &str, commands: Vec<String>) -> Self {
        self.hosts.insert(host.to_lowercase(), commands);
        self
    }

    /// The built-in table: the reduced set on [`REDUCED_HOST`], the full set everywhere else.
    pub fn builtin() -> Self {
        Self::new(owned_list(&DEFAULT_COMMANDS))
            .with_host(REDUCED_HOST, owned_list(&REDUCED_COMMANDS))
    }

    pub fn commands_for(&self, hostname: &str) -> &[String] {
        let key = hostname.to_lowercase();
        match self.hosts.get(&key) {
            Some(commands) => {
                debug!("Using host-specific command list for '{}'", key);
                commands
            }
            None => {
                debug!("No command list for host '{}', using default list", key);
                &self.default
            }
        }
    }

    pub fn default_commands(&self) -> &[String] {
        &self.default
    }
}

fn owned_list(commands: &[&str]) -> Vec<String> {
    commands.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_host_gets_four_commands_in_any_case() {
        let table = LaunchTable::builtin();
        assert_eq!(table.commands_for("paddo").len(), 4);
        assert_eq!(table.commands_for("PADDO").len(), 4);
        assert_eq!(table.commands_for("Paddo").len(), 4);
    }

    #[test]
    fn other_hosts_get_the_full_list() {
        let table = LaunchTable::builtin();
        assert_eq!(table.commands_for("workstation").len(), 11);
        assert_eq!(table.commands_for("").len(), 11);
        // Only an exact match selects the reduced list.
        assert_eq!(table.commands_for("paddo.local").len(), 11);
    }

    #[test]
    fn reduced_list_keeps_its_order() {
        let table = LaunchTable::builtin();
        let commands = table.commands_for("paddo");
        assert!(commands[0].contains("TextEdit.app"));
        assert!(commands[1].contains("Ghostty.app"));
        assert!(commands[2].contains("Zed.app"));
        assert!(commands[3].contains("IntelliJ IDEA Ultimate.app"));
    }

    #[test]
    fn added_hosts_are_matched_case_insensitively() {
        let table = LaunchTable::new(vec!["a".into(), "b".into()])
            .with_host("Laptop", vec!["only-this".into()]);
        assert_eq!(table.commands_for("laptop"), ["only-this".to_string()]);
        assert_eq!(table.commands_for("desktop"), table.default_commands());
    }
}
