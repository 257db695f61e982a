use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct VersionOutput {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    codecs: Option<usize>,
}

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    let out = VersionOutput {
        name: "unirecode",
        version: env!("CARGO_PKG_VERSION"),
        target: args
            .extended
            .then(|| option_env!("UNIRECODE_BUILD_TARGET").unwrap_or("unknown")),
        codecs: args.extended.then_some(unirecode_registry::BUILTIN_CODECS.len()),
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table | OutputFormat::Pretty => {
            if !args.extended {
                println!("{} {}", out.name, out.version);
                return Ok(SUCCESS);
            }
            println!("name: {}", out.name);
            println!("version: {}", out.version);
            println!("target: {}", out.target.unwrap_or("unknown"));
            println!("target_os: {}", std::env::consts::OS);
            println!("codecs: {}", out.codecs.unwrap_or_default());
        }
    }

    Ok(SUCCESS)
}
