use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "yaml-split")]
#[command(
    about = "Split a multi-document YAML stream into one file per document, \
             named <kind>-<metadata.name>.yaml."
)]
pub struct Cli {
    /// Input manifest file. When the second argument is omitted, input is
    /// read from standard input and this argument names the output directory.
    pub input: String,

    /// Output directory; defaults to the first argument's value when omitted.
    pub out_dir: Option<String>,
}
