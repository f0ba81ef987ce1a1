use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qrmaster_core::{ContentType, Customization, EcLevel, ExportFormat, HexColor, ModulePattern};

#[derive(Parser, Debug)]
#[command(name = "qrmaster")]
#[command(about = "Generate, scan and keep QR codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the saved codes and config.toml
    #[arg(long, global = true, env = "QRMASTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the payload for a form
    Encode {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Render a form to a PNG or PDF file
    Render {
        #[command(flatten)]
        form: FormArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Output file; the extension picks the format unless --format is given
        #[arg(long, short = 'o')]
        output: PathBuf,

        #[arg(long)]
        format: Option<ExportFormat>,
    },
    /// Save a form to the collection
    Save {
        #[command(flatten)]
        form: FormArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[arg(long, short = 'n')]
        name: Option<String>,
    },
    /// List saved codes
    List {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one saved code
    Show {
        /// Id or unique id prefix
        id: String,
    },
    /// Rename a saved code; an empty name clears it
    Rename {
        id: String,
        #[arg(default_value = "")]
        name: String,
    },
    /// Delete a saved code
    Delete { id: String },
    /// Count a scan of a saved code
    RecordScan { id: String },
    /// Export a saved code as `<name or type>-qr.<ext>`
    Download {
        id: String,

        /// Target directory (defaults to <data-dir>/exports)
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,

        #[arg(long, short = 'f', default_value = "png")]
        format: ExportFormat,
    },
    /// Guess the form type of a scanned string
    Classify { text: String },
    /// Decode QR codes from image files
    Scan {
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Save the decoded content as a new code
        #[arg(long)]
        save: bool,

        #[arg(long, short = 'n', requires = "save")]
        name: Option<String>,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config.toml if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// url, text, contact, phone, email, sms, wifi, event, location or social
    pub content_type: ContentType,

    /// Form field as key=value (repeatable)
    #[arg(long = "field", short = 'f', value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Canvas side in pixels
    #[arg(long)]
    pub size: Option<NonZeroU32>,

    /// Error correction level (L, M, Q, H)
    #[arg(long = "ec")]
    pub error_correction: Option<EcLevel>,

    /// Quiet zone in modules
    #[arg(long)]
    pub margin: Option<u32>,

    /// Foreground color, e.g. #1f2937
    #[arg(long)]
    pub dark: Option<HexColor>,

    /// Background color
    #[arg(long)]
    pub light: Option<HexColor>,

    /// square, circle or rounded
    #[arg(long)]
    pub pattern: Option<ModulePattern>,

    /// Image drawn in the center
    #[arg(long)]
    pub logo: Option<PathBuf>,
}

impl StyleArgs {
    /// Overrides the fields given on the command line.
    pub fn apply(&self, mut base: Customization) -> Customization {
        if let Some(size) = self.size {
            base.size = size;
        }
        if let Some(level) = self.error_correction {
            base.error_correction_level = level;
        }
        if let Some(margin) = self.margin {
            base.margin = margin;
        }
        if let Some(dark) = self.dark {
            base.color.dark = dark;
        }
        if let Some(light) = self.light {
            base.color.light = light;
        }
        if let Some(pattern) = self.pattern {
            base.pattern = pattern;
        }
        if let Some(logo) = &self.logo {
            base.logo = Some(logo.clone());
        }
        base
    }
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("ssid=Home=1").unwrap(),
            ("ssid".to_string(), "Home=1".to_string())
        );
        assert_eq!(parse_field("body=").unwrap(), ("body".to_string(), String::new()));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn test_save_with_fields_and_style() {
        let cli = Cli::try_parse_from([
            "qrmaster", "save", "wifi", "-f", "ssid=Home", "-f", "password=pw", "--ec", "h",
            "--pattern", "circle", "--dark", "#000", "--name", "Home",
        ])
        .unwrap();

        let Commands::Save { form, style, name } = cli.command else {
            panic!("expected save");
        };
        assert_eq!(form.content_type, ContentType::Wifi);
        assert_eq!(form.fields.len(), 2);
        assert_eq!(name.as_deref(), Some("Home"));

        let customization = style.apply(Customization::default());
        assert_eq!(customization.error_correction_level, EcLevel::H);
        assert_eq!(customization.pattern, ModulePattern::Circle);
        assert_eq!(customization.color.dark, HexColor::BLACK);
        assert_eq!(customization.size.get(), 200);
    }

    #[test]
    fn test_rejects_unknown_type_and_bad_color() {
        assert!(Cli::try_parse_from(["qrmaster", "encode", "barcode"]).is_err());
        assert!(Cli::try_parse_from(["qrmaster", "render", "url", "-o", "a.png", "--dark", "red"]).is_err());
        assert!(Cli::try_parse_from(["qrmaster", "render", "url", "-o", "a.png", "--size", "0"]).is_err());
    }

    #[test]
    fn test_rename_defaults_to_clearing() {
        let cli = Cli::try_parse_from(["qrmaster", "rename", "abc"]).unwrap();
        let Commands::Rename { id, name } = cli.command else {
            panic!("expected rename");
        };
        assert_eq!(id, "abc");
        assert_eq!(name, "");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["qrmaster", "list", "--json", "-v", "--data-dir", "/tmp/q"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/q")));
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn test_scan_name_requires_save() {
        assert!(Cli::try_parse_from(["qrmaster", "scan", "a.png", "--name", "x"]).is_err());
        assert!(Cli::try_parse_from(["qrmaster", "scan", "a.png", "--save", "--name", "x"]).is_ok());
        assert!(Cli::try_parse_from(["qrmaster", "scan"]).is_err());
    }

    #[test]
    fn test_download_format() {
        let cli = Cli::try_parse_from(["qrmaster", "download", "ab", "-f", "pdf"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Download { format: ExportFormat::Pdf, dir: None, .. }
        ));
    }
}
