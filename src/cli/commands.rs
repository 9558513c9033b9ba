//! Command dispatch: one thin handler per pipeline operation

use std::fmt::Display;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::document;
use crate::domain::{self, TestDomainNames};
use crate::metadata::ProvisioningMetadata;
use crate::pods::{self, PodList};
use crate::registry::DockerConfig;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::CreateTestDomainYaml {
            running_yaml,
            test_yaml,
            metadata_json,
            new_image,
        }) => create_test_domain_yaml(running_yaml, test_yaml, metadata_json, new_image),
        Some(Commands::CheckPodsReady) => check_pods_ready(io::stdin().lock()),
        Some(Commands::GetReplicaCount { domain_yaml }) => get_replica_count(domain_yaml),
        Some(Commands::GetOcirUser { ocir_url }) => get_ocir_user(ocir_url, io::stdin().lock()),
        Some(Commands::GetOcirAuthToken { ocir_url }) => {
            get_ocir_auth_token(ocir_url, io::stdin().lock())
        }
        None => Err(CliError::Usage(Cli::command().render_help().to_string())),
    }
}

#[instrument]
pub fn create_test_domain_yaml(
    running_yaml: &Path,
    test_yaml: &Path,
    metadata_json: &Path,
    new_image: &str,
) -> CliResult<()> {
    let settings = Settings::load()?;
    let meta = ProvisioningMetadata::load(metadata_json)?;
    let names = TestDomainNames::from_metadata(&meta, &settings.test_suffix)?;
    debug!(uid = %names.domain_uid, namespace = %names.namespace, "derived test domain names");

    let running = document::load_yaml(running_yaml)?;
    let mut template = document::load_yaml(test_yaml)?;
    domain::build_test_domain(
        &mut template,
        &running,
        &names,
        new_image,
        settings.test_replicas,
    )?;
    document::save_yaml(test_yaml, &template)?;

    output::confirmation(&format!(
        "Successfully created test domain yaml [{}]",
        test_yaml.display()
    ));
    Ok(())
}

pub fn check_pods_ready(input: impl io::Read) -> CliResult<()> {
    let list = PodList::from_reader(input).map_err(reject_stdin)?;
    output::result(&pods::ready_condition_count(&list));
    Ok(())
}

/// Never fails the pipeline: errors are reported on stdout and the count
/// falls back to 0.
#[instrument]
pub fn get_replica_count(domain_yaml: &Path) -> CliResult<()> {
    let count = document::load_yaml(domain_yaml)
        .and_then(|doc| domain::replica_count(&doc))
        .unwrap_or_else(|err| {
            output::diagnostic(&format!(
                "Error reading replica count from [{}]: {}",
                domain_yaml.display(),
                err
            ));
            0
        });
    output::result(&count);
    Ok(())
}

pub fn get_ocir_user(ocir_url: &str, input: impl io::Read) -> CliResult<()> {
    let config = DockerConfig::from_reader(input).map_err(reject_stdin)?;
    let username = config.username(ocir_url).map_err(reject_stdin)?;
    output::result(username);
    Ok(())
}

pub fn get_ocir_auth_token(ocir_url: &str, input: impl io::Read) -> CliResult<()> {
    let config = DockerConfig::from_reader(input).map_err(reject_stdin)?;
    let password = config.password(ocir_url).map_err(reject_stdin)?;
    output::result(password);
    Ok(())
}

fn reject_stdin(err: impl Display) -> CliError {
    debug!("stdin document rejected: {err}");
    CliError::InvalidStdin
}
