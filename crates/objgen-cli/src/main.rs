use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

const DEMO_MODEL: &str = "\
// Model & generate Live JSON data values
// interactively using a simple syntax.
// String is the default value type
product = ObjGen Live JSON generator

// Number, Date & Boolean are also supported
// Specify types after property names
version n = 4.0
releaseDate d = 2017-02-10
demo b = true

// Tabs or spaces define complex values
person
  id number = 12345
  name = John Doe
  phones
    home = 800-123-4567
    mobile = 877-123-1234

  // Use [] to define simple type arrays
  email[] s = jd@example.com, jd@example.org
  dateOfBirth d = 1990-01-02
  registered b = true

  // Use [n] to define object arrays
  emergencyContacts[0]
    name s = Jane Doe
    phone s = 888-555-1212
    relationship = spouse
  emergencyContacts[1]
    name s = Justin Doe
    phone s = 877-123-1212
    relationship = parent

// See http://objgen.com for additional info
// We hope you enjoy the tool!
";

#[derive(Parser, Debug)]
#[command(
    name = "objgen-cli",
    about = "Generate JSON from ObjGen model text",
    version
)]
struct Args {
    /// Convert the built-in demo model and echo it first
    #[arg(short, long)]
    demo: bool,

    /// Spaces per model indentation level
    #[arg(long, default_value_t = 2)]
    spaces: usize,

    /// Indentation width of the JSON output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Single-line JSON output
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Input model file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let model = if args.demo {
        DEMO_MODEL.to_string()
    } else {
        let mut buf = String::new();
        match &args.input {
            Some(path) => {
                let mut f = File::open(path)?;
                f.read_to_string(&mut buf)?;
            }
            None => {
                stdin().read_to_string(&mut buf)?;
            }
        }
        buf
    };

    let options = objgen::Options {
        spaces_per_level: args.spaces,
        indent_width: args.indent,
    };

    if args.demo {
        println!("Input model:\n\n{model}");
        println!("Generated JSON:\n");
    }

    if args.compact {
        let value = objgen::generate(&model, &options);
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", objgen::generate_json(&model, &options)?);
    }

    Ok(())
}
