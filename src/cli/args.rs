//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Deployment pipeline helper for WebLogic domain resources
#[derive(Parser, Debug)]
#[command(name = "domtool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging. Twice for even more verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a template YAML into a test-domain variant
    ///
    /// Reads the uid and namespace from the provisioning metadata, appends
    /// the test suffix to both, pins the first cluster to a single replica,
    /// redirects the log home underneath the running domain's, and swaps in
    /// the image under test. The template file is overwritten in place.
    CreateTestDomainYaml {
        /// YAML of the currently running domain
        #[arg(value_hint = ValueHint::FilePath)]
        running_yaml: PathBuf,
        /// Template YAML to be overwritten with the test variant
        #[arg(value_hint = ValueHint::FilePath)]
        test_yaml: PathBuf,
        /// Provisioning metadata JSON (wls_domain_uid, wls_domain_namespace)
        #[arg(value_hint = ValueHint::FilePath)]
        metadata_json: PathBuf,
        /// Image reference for the domain under test
        new_image: String,
    },

    /// Count ready pods from pod-status JSON on stdin
    CheckPodsReady,

    /// Print spec.clusters[0].replicas from a domain YAML
    ///
    /// Never fails the pipeline: on any error a diagnostic is printed,
    /// followed by 0.
    GetReplicaCount {
        /// Domain YAML file
        #[arg(value_hint = ValueHint::FilePath)]
        domain_yaml: PathBuf,
    },

    /// Print the registry username from credentials JSON on stdin
    GetOcirUser {
        /// Registry URL, e.g. phx.ocir.io
        ocir_url: String,
    },

    /// Print the registry auth token from credentials JSON on stdin
    GetOcirAuthToken {
        /// Registry URL, e.g. phx.ocir.io
        ocir_url: String,
    },
}
