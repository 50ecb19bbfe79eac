use crate::common::*;

use crate::env_configuration::env_config::*;

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_BASENAME: &str = "workload_chart";
const MAX_LOG_FILES: usize = 10;

#[doc = r#"
    Starts the global flexi_logger backend.

    Log files rotate daily under `LOG_DIR` (default `logs`) and every record is also
    duplicated to stdout so the invocation environment captures it. The returned
    handle must stay alive for the lifetime of the run.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_dir: String =
        get_optional_with(&process_env, LOG_DIR).unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());
    let log_level: String = get_optional_with(&process_env, LOG_LEVEL)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let handle: LoggerHandle = Logger::try_with_str(&log_level)
        .context("[logger_utils->set_global_logger] Invalid log level")?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(custom_format)
        .start()
        .context("[logger_utils->set_global_logger] Failed to start logger")?;

    Ok(handle)
}

#[doc = "Line format: `[timestamp] [LEVEL] T[thread] [module] message`"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}
