extern crate rabin_cryptosystem;

use rabin_cryptosystem::api;

fn main() {
    env_logger::init();

    let plaintext = "hello world";
    let mut rng = rand::thread_rng();

    match api::encrypt(32, plaintext, &mut rng) {
        Ok(encrypted) => {
            println!("{}", serde_json::to_string_pretty(&encrypted).unwrap());

            let ciphertexts: Vec<String> = encrypted
                .encrypted_message
                .iter()
                .map(|entry| entry.ciphertext.clone())
                .collect();
            let decrypted = api::decrypt(
                &encrypted.private_key.p,
                &encrypted.private_key.q,
                &encrypted.public_key.n,
                &ciphertexts.join(","),
            )
            .unwrap();
            println!("recovered: {}", decrypted.original_message);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
