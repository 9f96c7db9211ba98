use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing_subscriber::EnvFilter;

use argon2jni_core::identity::{Variant, ARGON2D_ID, ARGON2ID_ID, ARGON2I_ID};
use argon2jni_core::local::LocalHost;
use argon2jni_core::params::{
    recommended_encoded_len, HashArgs, SecurityParameters, VerifyArgs, DEFAULT_HASH_LEN, DEFAULT_SALT_LEN,
    DEFAULT_VARIANT,
};
use argon2jni_core::Boundary;
use argon2jni_native::NativeArgon2;

const DEFAULTS: SecurityParameters = SecurityParameters::OFFICIAL_DEFAULT;

#[derive(Parser)]
#[command(name = "argon2jni", about = "Drive the argon2jni hash/verify boundary from the command line")]
struct Cli {
    /// Log transaction spans at debug level
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash a password, printing the raw hash as hex and the encoded string
    Hash {
        #[arg(long)]
        password: String,

        /// Salt as text
        #[arg(long, conflicts_with = "salt_hex")]
        salt: Option<String>,

        /// Salt as hex; a random 16-byte salt is used when neither is given
        #[arg(long)]
        salt_hex: Option<String>,

        #[command(flatten)]
        costs: CostArgs,

        /// Encoded buffer length; defaults to the recommended length
        #[arg(long, conflicts_with = "raw")]
        encoded_len: Option<i32>,

        /// Only produce the raw hash
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Check a password against an encoded hash; exits 1 on mismatch
    Verify {
        #[arg(long)]
        encoded: String,

        #[arg(long)]
        password: String,

        #[arg(long, value_enum, default_value_t = VariantArg::from(DEFAULT_VARIANT))]
        variant: VariantArg,
    },

    /// Print the recommended encoded buffer length
    EncodedLen {
        #[command(flatten)]
        costs: CostArgs,

        #[arg(long, default_value_t = DEFAULT_SALT_LEN)]
        salt_len: usize,
    },
}

#[derive(Args)]
struct CostArgs {
    #[arg(long, default_value_t = DEFAULTS.t_cost as i32)]
    t_cost: i32,

    /// Memory cost in KiB
    #[arg(long, default_value_t = DEFAULTS.m_cost as i32)]
    m_cost: i32,

    #[arg(long, default_value_t = DEFAULTS.parallelism as i32)]
    parallelism: i32,

    #[arg(long, default_value_t = DEFAULT_HASH_LEN as i32)]
    hash_len: i32,

    #[arg(long, value_enum, default_value_t = VariantArg::from(DEFAULT_VARIANT))]
    variant: VariantArg,

    /// Algorithm version, 16 (0x10) or 19 (0x13)
    #[arg(long = "version", default_value_t = 19)]
    version_id: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum VariantArg {
    D,
    I,
    Id,
}

impl VariantArg {
    fn id(self) -> i32 {
        match self {
            VariantArg::D => ARGON2D_ID,
            VariantArg::I => ARGON2I_ID,
            VariantArg::Id => ARGON2ID_ID,
        }
    }
}

impl From<Variant> for VariantArg {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::D => VariantArg::D,
            Variant::I => VariantArg::I,
            Variant::Id => VariantArg::Id,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    match cli.cmd {
        Command::Hash { password, salt, salt_hex, costs, encoded_len, raw } => {
            run_hash(password, salt, salt_hex, costs, encoded_len, raw)
        }
        Command::Verify { encoded, password, variant } => run_verify(encoded, password, variant),
        Command::EncodedLen { costs, salt_len } => run_encoded_len(costs, salt_len),
    }
}

fn install_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_hash(
    password: String,
    salt: Option<String>,
    salt_hex: Option<String>,
    costs: CostArgs,
    encoded_len: Option<i32>,
    raw: bool,
) -> Result<ExitCode> {
    let salt = resolve_salt(salt, salt_hex)?;

    let encoded_len = if raw {
        0
    } else {
        match encoded_len {
            Some(len) => len,
            None => {
                let len = recommended_encoded_len(
                    &costs.security()?,
                    usize::try_from(costs.hash_len).context("--hash-len must be positive")?,
                    costs.version_id,
                    salt.len(),
                );
                i32::try_from(len).context("recommended encoded length does not fit a jint")?
            }
        }
    };

    let boundary = Boundary::new(NativeArgon2::new());
    let mut host = LocalHost::new();
    let result = host
        .hash(
            &boundary,
            HashArgs {
                t_cost: costs.t_cost,
                m_cost: costs.m_cost,
                parallelism: costs.parallelism,
                password: password.as_bytes(),
                salt: salt.as_slice(),
                hash_len: costs.hash_len,
                encoded_len,
                variant_id: costs.variant.id(),
                version_id: costs.version_id,
            },
        )
        .context("hash failed")?;

    println!("{}", hex::encode(result.as_bytes()));
    if let Some(encoded) = result.encoded() {
        println!("{encoded}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_verify(encoded: String, password: String, variant: VariantArg) -> Result<ExitCode> {
    let boundary = Boundary::new(NativeArgon2::new());
    let mut host = LocalHost::new();
    let matched = host
        .verify(
            &boundary,
            VerifyArgs {
                encoded: encoded.as_str(),
                password: password.as_bytes(),
                variant_id: variant.id(),
            },
        )
        .context("verify failed")?;

    if matched {
        println!("match");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("mismatch");
        Ok(ExitCode::from(1))
    }
}

fn run_encoded_len(costs: CostArgs, salt_len: usize) -> Result<ExitCode> {
    let hash_len = usize::try_from(costs.hash_len).context("--hash-len must be positive")?;
    let len = recommended_encoded_len(&costs.security()?, hash_len, costs.version_id, salt_len);
    println!("{len}");
    Ok(ExitCode::SUCCESS)
}

impl CostArgs {
    fn security(&self) -> Result<SecurityParameters> {
        let t_cost = u32::try_from(self.t_cost).context("--t-cost must be positive")?;
        let m_cost = u32::try_from(self.m_cost).context("--m-cost must be positive")?;
        let parallelism = u32::try_from(self.parallelism).context("--parallelism must be positive")?;
        Ok(SecurityParameters::new(t_cost, m_cost, parallelism))
    }
}

fn resolve_salt(salt: Option<String>, salt_hex: Option<String>) -> Result<Vec<u8>> {
    match (salt, salt_hex) {
        (Some(_), Some(_)) => Err(anyhow!("--salt and --salt-hex are mutually exclusive")),
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(hex)) => hex::decode(hex.trim()).context("invalid --salt-hex"),
        (None, None) => {
            let mut salt = vec![0u8; DEFAULT_SALT_LEN];
            OsRng.fill_bytes(&mut salt);
            Ok(salt)
        }
    }
}
