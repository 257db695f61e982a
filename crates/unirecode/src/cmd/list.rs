use unirecode_registry::CodecRegistry;

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_codecs, OutputFormat};

pub fn run(_args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = CodecRegistry::with_builtin();
    print_codecs(&registry.codecs(), format);
    Ok(SUCCESS)
}
