use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::info;
use unirecode_codec::{recode_stream, RecodeConfig};
use unirecode_registry::{CodecRegistry, RegistryConfig};

use crate::cmd::RecodeArgs;
use crate::exit::{io_error, recode_error, registry_error, CliResult, SUCCESS};

pub fn run(args: RecodeArgs) -> CliResult<i32> {
    let registry = CodecRegistry::with_builtin_and_config(RegistryConfig {
        case_insensitive_lookup: args.ignore_case,
    });

    // Resolve both names before touching the filesystem, so a typo never
    // truncates the output file.
    let mut decoder = registry.decoder(&args.decoder).map_err(registry_error)?;
    let mut encoder = registry.encoder(&args.encoder).map_err(registry_error)?;

    let input = args.input.as_deref().filter(|path| *path != Path::new("-"));
    let (reader, source_name): (Box<dyn Read>, String) = match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed to open {}", path.display()), err))?;
            (Box::new(file), path.display().to_string())
        }
        None => (Box::new(io::stdin().lock()), "<stdin>".to_string()),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|err| io_error(&format!("failed to create {}", path.display()), err))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let config = RecodeConfig {
        read_buffer_size: args.buffer_size,
        write_buffer_size: args.buffer_size,
    };
    let stats = recode_stream(decoder.as_mut(), encoder.as_mut(), reader, writer, &config)
        .map_err(|err| recode_error(&source_name, err))?;

    info!(
        decoder = %args.decoder,
        encoder = %args.encoder,
        characters = stats.characters,
        "recode finished"
    );
    Ok(SUCCESS)
}
