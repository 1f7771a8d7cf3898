use crate::form::parse_time;
use crate::models::AlarmRecord;
use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8080";

/// Serves the alarm page and the `/alarm` resource.
#[derive(Debug, Parser)]
#[command(name = "alarm_app", version)]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "ALARM_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Alarm time at startup as HH:MM. The alarm starts disabled.
    #[arg(long, env = "ALARM_INITIAL", value_parser = parse_initial_alarm)]
    pub initial: Option<AlarmRecord>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn initial_alarm(&self) -> AlarmRecord {
        self.initial.unwrap_or_default()
    }
}

fn parse_initial_alarm(value: &str) -> Result<AlarmRecord, String> {
    let (hour, minute) = parse_time(value).map_err(|err| err.to_string())?;
    let alarm = AlarmRecord::new(hour, minute, false);
    if !alarm.is_valid() {
        return Err(format!("{value:?} is not a time of day"));
    }
    Ok(alarm)
}

/// Reads or sets the alarm of a running alarm_app.
#[derive(Debug, Parser)]
#[command(name = "alarmctl", version)]
pub struct ClientConfig {
    #[arg(long, env = "ALARM_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Render times without zero padding.
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current alarm.
    Get,
    /// Replace the alarm.
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Alarm time as HH:MM.
    pub time: String,

    #[arg(long, conflicts_with = "disabled")]
    pub enabled: bool,

    #[arg(long)]
    pub disabled: bool,
}

impl SetArgs {
    /// `None` keeps whatever the server currently has.
    pub fn enabled(&self) -> Option<bool> {
        match (self.enabled, self.disabled) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults_to_disabled_seven_oclock() {
        let config = ServerConfig::try_parse_from(["alarm_app"]).unwrap();
        assert_eq!(config.initial_alarm(), AlarmRecord::default());
    }

    #[test]
    fn server_initial_alarm_is_disabled() {
        let config =
            ServerConfig::try_parse_from(["alarm_app", "--port", "9000", "--initial", "06:30"])
                .unwrap();
        assert_eq!(config.addr().port(), 9000);
        assert_eq!(config.initial_alarm(), AlarmRecord::new(6, 30, false));
    }

    #[test]
    fn server_rejects_invalid_initial_alarm() {
        assert!(ServerConfig::try_parse_from(["alarm_app", "--initial", "25:00"]).is_err());
        assert!(ServerConfig::try_parse_from(["alarm_app", "--initial", "noon"]).is_err());
    }

    #[test]
    fn client_set_flags() {
        let config =
            ClientConfig::try_parse_from(["alarmctl", "set", "07:15", "--disabled"]).unwrap();
        let Command::Set(args) = config.command else {
            panic!("expected set");
        };
        assert_eq!(args.time, "07:15");
        assert_eq!(args.enabled(), Some(false));
    }

    #[test]
    fn client_set_flags_conflict() {
        assert!(
            ClientConfig::try_parse_from(["alarmctl", "set", "07:15", "--enabled", "--disabled"])
                .is_err()
        );
    }
}
