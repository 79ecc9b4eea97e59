use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::PerforceConfig;
use crate::domain::change::{ChangeRecord, decode_latin1};
use crate::error::{AppError, AppResult};
use crate::services::ChangeSourceService;

const LATEST_CHANGE_ARGS: [&str; 5] = ["changes", "-t", "-m", "1", "-l"];
const INFO_ARGS: [&str; 1] = ["info"];

pub struct P4Cli {
    config: PerforceConfig,
}

impl P4Cli {
    pub fn new(config: PerforceConfig) -> Self {
        Self { config }
    }

    async fn run(&self, args: &[&str]) -> AppResult<Vec<u8>> {
        let program = self.config.binary.display().to_string();
        let output = Command::new(&self.config.binary)
            .args(args)
            .envs(self.config.env_vars())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| AppError::Execution(format!("failed to run {program}: {err}")))?;

        if !output.status.success() {
            return Err(AppError::Execution(format!(
                "{program} {} exited with {}: {}",
                args.join(" "),
                output.status,
                decode_latin1(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ChangeSourceService for P4Cli {
    async fn fetch_latest(&self) -> AppResult<ChangeRecord> {
        let stdout = self.run(&LATEST_CHANGE_ARGS).await?;
        Ok(ChangeRecord::from_latin1(&stdout))
    }

    async fn server_info(&self) -> AppResult<String> {
        let stdout = self.run(&INFO_ARGS).await?;
        Ok(decode_latin1(&stdout))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn cli(binary: &str) -> P4Cli {
        P4Cli::new(PerforceConfig {
            binary: PathBuf::from(binary),
            port: "127.0.0.1:1666".to_string(),
            user: "svc_bot_p4".to_string(),
            client: "bot_client".to_string(),
            tickets: None,
        })
    }

    #[tokio::test]
    async fn captures_stdout_of_child() {
        let record = cli("echo").fetch_latest().await.unwrap();
        assert_eq!(record.as_str(), "changes -t -m 1 -l\n");
    }

    #[tokio::test]
    async fn missing_binary_is_execution_error() {
        let err = cli("/nonexistent/p4").fetch_latest().await.unwrap_err();
        assert!(matches!(err, AppError::Execution(_)));
    }

    #[tokio::test]
    async fn non_zero_exit_is_execution_error() {
        let err = cli("false").fetch_latest().await.unwrap_err();
        match err {
            AppError::Execution(message) => assert!(message.contains("exited with")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
