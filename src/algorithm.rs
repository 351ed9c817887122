use crate::error::Error;
use crate::result::Result;

#[derive(Debug)]
pub struct Algorithm {
    pub id: usize,
    pub name: &'static str,

    /// Digest length in bytes.
    pub len: usize,

    pub(crate) evp: fn() -> &'static openssl::md::MdRef,
}

const ALGORITHM: &'static [Algorithm] = &[
    Algorithm {
        id: 0,
        name: "md5",
        len: 16,
        evp: openssl::md::Md::md5,
    },
    Algorithm {
        id: 1,
        name: "sha1",
        len: 20,
        evp: openssl::md::Md::sha1,
    },
    Algorithm {
        id: 2,
        name: "sha224",
        len: 28,
        evp: openssl::md::Md::sha224,
    },
    Algorithm {
        id: 3,
        name: "sha256",
        len: 32,
        evp: openssl::md::Md::sha256,
    },
    Algorithm {
        id: 4,
        name: "sha384",
        len: 48,
        evp: openssl::md::Md::sha384,
    },
    Algorithm {
        id: 5,
        name: "sha512",
        len: 64,
        evp: openssl::md::Md::sha512,
    },
];

pub fn get_by_id(id: usize) -> Result<&'static Algorithm> {
    if id < ALGORITHM.len() && id == ALGORITHM[id].id {
        return Ok(&ALGORITHM[id]);
    }

    Err(Error::UnknownAlgorithm(format!("id {}", id)))
}

pub fn get_by_name(name: &str) -> Result<&'static Algorithm> {
    let n = name.to_lowercase();

    for a in ALGORITHM {
        if n == a.name {
            return Ok(a);
        }
    }

    Err(Error::UnknownAlgorithm(name.to_string()))
}
