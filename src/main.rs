use parseopts::{logging, OptionsGroup, ParseOptions, Registrar};
use tracing::{debug, info};

const USAGE: &str = "Print how options and positional arguments are resolved.

Usage:  parseopts [options] <arg1> [<arg2> ...]
 e.g.:  parseopts --beam=10 --config=decode.conf model.mdl input.wav";

struct DecoderOptions {
    beam: f32,
    lattice_beam: f64,
    max_active: i32,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            beam: 16.0,
            lattice_beam: 10.0,
            max_active: 7000,
        }
    }
}

impl OptionsGroup for DecoderOptions {
    fn register_into<'a, R: Registrar<'a>>(&'a mut self, r: &mut R) {
        r.register("beam", &mut self.beam, "Decoding beam");
        r.register("lattice-beam", &mut self.lattice_beam, "Lattice generation beam");
        r.register("max-active", &mut self.max_active, "Decoder max active states");
    }
}

fn main() {
    let mut binary = true;
    let mut num_threads = 1u32;
    let mut word_symbols = String::new();
    let mut decoder = DecoderOptions::default();

    let mut po = ParseOptions::new(USAGE);
    po.register("binary", &mut binary, "Write output in binary mode");
    po.register("num-threads", &mut num_threads, "Number of worker threads");
    po.register("word-symbols", &mut word_symbols, "Symbol table for words");
    po.register_group_with_prefix("decoder", &mut decoder);

    po.read_or_exit(std::env::args());
    logging::setup_logging(po.verbose());

    if po.num_args() < 1 {
        parseopts::output::echo(&po.usage());
        std::process::exit(parseopts::exitcode::USAGE);
    }
    if let Some(path) = po.config_file() {
        info!(path, "config merged");
    }
    println!("{}", po.resolved_values());

    let args = po.into_parsed();
    for (i, arg) in args.positional().iter().enumerate() {
        println!("arg {}: {}", i + 1, arg);
    }
    debug!(
        binary,
        num_threads,
        word_symbols = %word_symbols,
        beam = decoder.beam,
        lattice_beam = decoder.lattice_beam,
        max_active = decoder.max_active,
        "resolved"
    );
}
