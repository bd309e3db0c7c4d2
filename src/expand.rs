use std::io::Write;

use crate::text;
use crate::{Context, Similarity, Tokens};

pub fn main(args: &clap_v3::ArgMatches) {
    let address = args.value_of("ADDRESS").unwrap().to_string();

    let context = Context::new(String::from("co"), Tokens::generate());

    let candidates = text::syn_homonyms(&address, &context.tokens);

    for record in Similarity::filter(&address, &candidates) {
        let line = serde_json::to_string(&record).unwrap();
        std::io::stdout().write_all(format!("{}\n", line).as_bytes()).unwrap();
    }
}
