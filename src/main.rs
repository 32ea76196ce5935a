//! ClipThumb - shows a `.clip` document through its registered preview handler
//!
//! Usage: `clipthumb <file.clip> <window_title_token>`
//!
//! The window stays up until the launching process destroys it (or kills
//! this process). Exit code 0 after a normal teardown, 1 on any failure.

use std::process::ExitCode;

use clipthumb::domain::entities::PreviewRequest;
use clipthumb::domain::PreviewError;
use clipthumb::log;
use clipthumb::shared::config::PreviewConfig;

fn main() -> ExitCode {
    let (config, config_error) = match PreviewConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (PreviewConfig::default(), Some(e)),
    };

    // Bad arguments exit before anything is created, log file included
    let args: Vec<String> = std::env::args().collect();
    let request = match PreviewRequest::from_args(
        &args,
        &config.required_extension,
        &config.window.default_title,
    ) {
        Ok(request) => request,
        Err(e) => return fail(&e),
    };

    if config.logging.enabled {
        let path = config
            .logging
            .path
            .clone()
            .unwrap_or_else(log::default_log_path);
        log::init(&path);
    }
    clipthumb::log!("main() starting");
    if let Some(e) = config_error {
        let path = PreviewConfig::find_config_path().unwrap_or_default();
        clipthumb::log!("ignoring {}: {}, using defaults", path.display(), e);
    }

    match run(&config, &request) {
        Ok(()) => {
            clipthumb::log!("main() exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            clipthumb::log!("main() failed: {}", e);
            fail(&e)
        }
    }
}

fn fail(e: &PreviewError) -> ExitCode {
    eprintln!("clipthumb: {e}");
    ExitCode::FAILURE
}

#[cfg(target_os = "windows")]
fn run(config: &PreviewConfig, request: &PreviewRequest) -> Result<(), PreviewError> {
    use clipthumb::application::use_cases::ShowPreviewUseCase;
    use clipthumb::infrastructure::Win32Platform;

    let platform = Win32Platform::new(config);
    ShowPreviewUseCase::new(&platform, config).run(request)
}

#[cfg(not(target_os = "windows"))]
fn run(_config: &PreviewConfig, _request: &PreviewRequest) -> Result<(), PreviewError> {
    Err(PreviewError::Usage(
        "preview hosting requires Windows".to_string(),
    ))
}
