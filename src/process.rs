use indicatif::ProgressBar;
use log::{error, info, warn};
use rayon::prelude::*;

use crate::geocode::Geocoder;
use crate::map::{self, Marker};
use crate::store;
use crate::stream::AddrStream;
use crate::text;
use crate::{Context, Similarity, Tokens};

pub fn main(args: &clap_v3::ArgMatches) {
    let inputs: Vec<String> = args.values_of("INPUT").unwrap().map(String::from).collect();
    let column = args.value_of("column").unwrap().to_string();
    let bucket = args.value_of("bucket").map(String::from);
    let outmap = args.value_of("map").unwrap().to_string();

    let key = match args.value_of("key").map(String::from).or_else(|| std::env::var("GOOGLE_API_KEY").ok()) {
        Some(key) => key,
        None => {
            println!();
            println!("No geocoding API key found");
            println!("  pass --key or set GOOGLE_API_KEY");
            println!();
            std::process::exit(1);
        }
    };

    let context = Context::new(String::from("co"), Tokens::generate());
    let geocoder = Geocoder::new(key);

    let mut located: Vec<Marker> = Vec::new();
    let mut results: Vec<(Similarity, f64, f64)> = Vec::new();

    for input in inputs {
        info!("processing document: {}", input);

        if let Some(ref bucket) = bucket {
            match store::upload(&input, bucket) {
                Ok(location) => info!("document archived at {}", location),
                Err(err) => {
                    error!("skipping {}: {}", input, err);
                    continue;
                }
            };
        }

        let stream = match AddrStream::new(&input, &column) {
            Ok(stream) => stream,
            Err(err) => {
                error!("skipping {}: {}", input, err);
                continue;
            }
        };

        let addresses: Vec<String> = stream.collect();
        if addresses.len() == 0 {
            warn!("no addresses found in {}", input);
            continue;
        }
        info!("found {} addresses in {}", addresses.len(), input);

        // expansion and scoring are pure, run them across the document in
        // parallel before the sequential geocoding pass
        let progress = ProgressBar::new(addresses.len() as u64);
        let matched: Vec<(String, Vec<Similarity>)> = addresses
            .par_iter()
            .map(|address| {
                let candidates = text::syn_homonyms(address, &context.tokens);
                let retained = Similarity::filter(address, &candidates);
                progress.inc(1);
                (address.to_owned(), retained)
            })
            .collect();
        progress.finish_and_clear();

        for (address, retained) in matched {
            if retained.len() == 0 {
                warn!("no candidates at or above threshold for '{}'", address);
                continue;
            }

            for record in retained {
                match geocoder.lookup(&record.candidate, &context) {
                    Ok(Some((lat, lng))) => {
                        info!("located '{}' at ({}, {})", record.candidate, lat, lng);
                        located.push(Marker::new(lat, lng, text::titlecase(&record.original, &context)));
                        results.push((record, lat, lng));
                    },
                    Ok(None) => warn!("no coordinates found for '{}'", record.candidate),
                    Err(err) => error!("geocoding failed for '{}': {}", record.candidate, err)
                };
            }
        }
    }

    if results.len() == 0 {
        warn!("no addresses could be located");
        return;
    }

    for (record, lat, lng) in &results {
        println!("{} | {} | ({}, {}) | {}%", record.original, record.candidate, lat, lng, record.score);
    }

    match map::create_map(&located, &outmap) {
        Ok(()) => info!("map written to {}", outmap),
        Err(err) => error!("failed to write map: {}", err)
    };
}
