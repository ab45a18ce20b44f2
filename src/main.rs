use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use golatest::application::LatestAction;
use golatest::config::Config;
use golatest::http::{MetadataFetcher, TransportError};
use golatest::platform::Platform;
use golatest::release::DecodeError;
use log::{error, info};
use std::process::ExitCode;

/// golatest - find the latest Go release for this platform
///
/// Downloads the Go release list and reports the newest release that ships
/// an archive for the current OS and architecture.
///
/// Examples:
///   golatest                          # Latest archive for this machine
///   golatest --os windows --arch 386  # Latest archive for another platform
#[derive(Parser, Debug)]
#[command(author, version = env!("GOLATEST_VERSION"), about)]
struct Cli {
    /// Release metadata URL (defaults to https://go.dev/dl/?mode=json)
    #[arg(long, env = "GOLATEST_URL", value_name = "URL")]
    url: Option<String>,

    /// Request timeout in seconds (defaults to 3)
    #[arg(long, env = "GOLATEST_TIMEOUT", value_name = "SECS")]
    timeout: Option<u64>,

    /// Target operating system, using Go names (e.g. linux, darwin, windows)
    #[arg(long, value_name = "OS")]
    os: Option<String>,

    /// Target architecture, using Go names (e.g. amd64, arm64, 386)
    #[arg(long, value_name = "ARCH")]
    arch: Option<String>,
}

const EXIT_FAILURE: u8 = 1;
const EXIT_TRANSPORT: u8 = 2;
const EXIT_DECODE: u8 = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let platform = Platform::detect_with(cli.os, cli.arch);
    info!("os: {}, arch: {}", platform.os, platform.arch);

    let config = Config::new(cli.url, cli.timeout)?;
    let fetcher = MetadataFetcher::new(&config)?;

    let mut stdout = std::io::stdout().lock();
    LatestAction::new(fetcher, platform).run(&mut stdout).await?;
    Ok(())
}

/// Help and version keep clap's handling; other parse failures exit with
/// `EXIT_FAILURE`.
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => {
            let _ = e.print();
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn exit_code(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<TransportError>().is_some() {
        EXIT_TRANSPORT
    } else if e.downcast_ref::<DecodeError>().is_some() {
        EXIT_DECODE
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use golatest::http::FetchMetadata;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["golatest"]).unwrap();
        assert_eq!(cli.os, None);
        assert_eq!(cli.arch, None);
    }

    #[test]
    fn test_cli_platform_overrides() {
        let cli = Cli::try_parse_from(["golatest", "--os", "windows", "--arch", "386"]).unwrap();
        assert_eq!(cli.os.as_deref(), Some("windows"));
        assert_eq!(cli.arch.as_deref(), Some("386"));
    }

    #[test]
    fn test_cli_url_and_timeout() {
        let cli = Cli::try_parse_from([
            "golatest",
            "--url",
            "http://localhost:1234/dl",
            "--timeout",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://localhost:1234/dl"));
        assert_eq!(cli.timeout, Some(10));
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["golatest", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn test_exit_code_for_decode_error() {
        let err = anyhow::Error::from(golatest::release::decode(b"nope").unwrap_err());
        assert_eq!(exit_code(&err), EXIT_DECODE);
    }

    #[tokio::test]
    async fn test_exit_code_for_transport_error() {
        let config = Config::new(Some("http://127.0.0.1:1/dl".into()), Some(3)).unwrap();
        let fetcher = MetadataFetcher::new(&config).unwrap();

        let err = anyhow::Error::from(fetcher.fetch().await.unwrap_err());
        assert_eq!(exit_code(&err), EXIT_TRANSPORT);
    }

    #[test]
    fn test_usage_error_kind_for_bad_timeout() {
        let err = Cli::try_parse_from(["golatest", "--timeout", "soon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let err = anyhow::anyhow!("Timeout must be at least one second");
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }
}
