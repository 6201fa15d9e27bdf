extern crate rabin_cryptosystem;

use rabin_cryptosystem::api;

fn main() {
    env_logger::init();

    let mut rng = rand::thread_rng();

    // A 16-bit prime pair gives a ~32-bit modulus, which trial division
    // breaks in well under a second.
    match api::generate(16, &mut rng) {
        Ok(keys) => {
            println!("public modulus n = {}", keys.n);
            match api::factorize(&keys.n).unwrap() {
                Some(factors) => {
                    println!("recovered p = {}, q = {}", factors.p, factors.q);
                    println!("private pair was p = {}, q = {}", keys.p, keys.q);
                }
                None => println!("no factors found"),
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
