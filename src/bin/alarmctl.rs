use alarm_app::config::{ClientConfig, Command};
use alarm_app::form::{MemoryCheckbox, MemoryStatus, MemoryTimeInput, RenderStyle};
use alarm_app::{AlarmFormSync, AlarmRecord, HttpAlarmApi};
use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

type Widget = AlarmFormSync<HttpAlarmApi, MemoryTimeInput, MemoryCheckbox, MemoryStatus>;

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ClientConfig) -> alarm_app::SyncResult<()> {
    let api = match config.timeout {
        Some(secs) => HttpAlarmApi::with_timeout(&config.url, Duration::from_secs(secs))?,
        None => HttpAlarmApi::new(&config.url),
    };
    let style = if config.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::ZeroPadded
    };

    let mut widget: Widget =
        AlarmFormSync::new(api, MemoryTimeInput::default(), MemoryCheckbox::default())
            .with_style(style)
            .with_status(MemoryStatus::default());
    let alarm = widget.initialize().await?;

    match config.command {
        Command::Get => print_form(&widget, &alarm),
        Command::Set(args) => {
            widget.time_input_mut().0 = args.time.clone();
            if let Some(enabled) = args.enabled() {
                widget.checkbox_mut().0 = enabled;
            }
            let saved = widget.on_save_triggered().await?;
            print_form(&widget, &saved);
            if let Some(status) = widget.status().filter(|status| status.visible) {
                println!("{}", status.text);
            }
        }
    }
    Ok(())
}

fn print_form(widget: &Widget, alarm: &AlarmRecord) {
    let state = if widget.checkbox().0 { "enabled" } else { "disabled" };
    println!("{} {state}", widget.time_input().0);
    if alarm.enabled {
        if let Some(when) = alarm.next_occurrence(Local::now()) {
            println!("next: {}", when.format("%a %Y-%m-%d %H:%M"));
        }
    }
}
