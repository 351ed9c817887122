use crate::digest::Digest;
use crate::result::Result;

pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn message_digest(algorithm: &str, parts: &[&str]) -> Result<Vec<u8>> {
    let mut d = parts
        .iter()
        .copied()
        .fold(Digest::new(algorithm)?, |d, p| d.chain(p));

    Ok(d.value().to_vec())
}

// Outermost error boundary: a construction failure is reported as
// a message here instead of being propagated.
pub fn print_message_digest(algorithm: &str, parts: &[&str]) {
    let mut d = match Digest::new(algorithm) {
        Err(e) => {
            eprintln!("Error occurred: {}", e);
            return;
        }
        Ok(d) => d,
    };

    let mut line = String::from("Message parts: ");
    for p in parts {
        d.update(p.as_bytes());
        line.push('[');
        line.push_str(p);
        line.push(']');
    }

    let hex = format_hex(d.value());

    eprintln!("{}", line);
    eprintln!(
        "Message digest obtain with {} algorithm is: {}",
        d.name(),
        hex
    );
}
