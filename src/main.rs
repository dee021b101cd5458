use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, fs, path::PathBuf};

use poem_tabize::{
    poem_txt::{
        assembler::Poems,
        format::{PoemTxtFormat, DEFAULT_LABEL, DEFAULT_TRAILING_TOLERANCE},
        poem::Poem,
        renderer::{render_poems_json, render_poems_tsv},
    },
    utility::text::{decode_text, DEFAULT_ENCODING},
};

enum OutputFormat {
    Tsv,
    Json,
}

impl OutputFormat {
    fn of(name: &str) -> Result<Self> {
        match name {
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            name => bail!("Unknown output format: {}", name),
        }
    }

    fn default_output_path(&self) -> &'static str {
        match self {
            Self::Tsv => "result.txt",
            Self::Json => "result.json",
        }
    }
}

struct Args {
    input_path: String,
    output_path: String,
    output_format: OutputFormat,
    encoding: String,
    format: PoemTxtFormat,
}

fn print_usage(program: &str, opts: &getopts::Options) {
    let brief = format!("Usage: {} [options] <input> [output]", program);
    print!("{}", opts.usage(&brief));
}

fn get_args() -> Result<Option<Args>> {
    let program = env::args().next().unwrap_or_else(|| "poem-tabize".to_owned());
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("l", "label", "content label string", "LABEL");
    opts.optopt("t", "tolerance", "trailing-character tolerance", "N");
    opts.optopt("e", "encoding", "input encoding", "LABEL");
    opts.optopt("f", "format", "output format (tsv or json)", "FORMAT");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return Ok(None);
    }

    let input_path = matches
        .free
        .first()
        .context("path to input .tab file is required")?
        .clone();

    let output_format = match matches.opt_str("f") {
        Some(name) => OutputFormat::of(&name)?,
        None => OutputFormat::Tsv,
    };

    let output_path = matches
        .free
        .get(1)
        .cloned()
        .unwrap_or_else(|| output_format.default_output_path().to_owned());

    let label = matches
        .opt_str("l")
        .unwrap_or_else(|| DEFAULT_LABEL.to_owned());

    let trailing_tolerance = match matches.opt_str("t") {
        Some(t) => t
            .parse()
            .with_context(|| format!("Invalid tolerance: {:?}", t))?,
        None => DEFAULT_TRAILING_TOLERANCE,
    };

    let format = PoemTxtFormat::new(&label, trailing_tolerance)?;

    let encoding = matches
        .opt_str("e")
        .unwrap_or_else(|| DEFAULT_ENCODING.to_owned());

    Ok(Some(Args {
        input_path,
        output_path,
        output_format,
        encoding,
        format,
    }))
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };

    let input_path = PathBuf::from(&args.input_path);
    ensure!(
        input_path.exists(),
        "File not found: {}",
        input_path.display()
    );

    println!("Processing {}...", input_path.display());

    let txt = {
        let bytes = fs::read(&input_path)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
        decode_text(&bytes, &args.encoding)
            .with_context(|| format!("Failed to decode {}", input_path.display()))?
    };

    let poems = assemble_with_progress(&txt, &args.format)
        .with_context(|| format!("Failed to parse {}", input_path.display()))?;

    println!("Finished. {} poems found.", poems.len());

    let output_path = PathBuf::from(&args.output_path);
    match args.output_format {
        OutputFormat::Tsv => {
            let file = fs::File::create(&output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?;
            render_poems_tsv(&poems, file)?;
        }
        OutputFormat::Json => {
            fs::write(&output_path, render_poems_json(&poems)?)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }
    }

    println!("Saved to {}", output_path.display());

    Ok(())
}

fn assemble_with_progress(txt: &str, format: &PoemTxtFormat) -> Result<Vec<Poem>> {
    let pb = create_progress_bar(txt.len() as u64)?;

    let mut poems = Vec::new();
    let mut iter = Poems::new(txt, format);
    while let Some(poem) = iter.next() {
        poems.push(poem?);
        pb.set_position(iter.consumed() as u64);
    }

    pb.finish_and_clear();

    Ok(poems)
}

fn create_progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} [{elapsed_precise} < {eta_precise}]",
        )?
        .progress_chars("#-"),
    );
    Ok(pb)
}
