use crate::algorithm;
use crate::error::Error;
use crate::result::Result;

/// Streaming message digest over one or more byte fragments.
pub struct Digest {
    name: String,
    ctx: Option<openssl::md_ctx::MdCtx>,
    value: Vec<u8>,
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Digest {{ {} }}", self.name)
    }
}

impl Digest {
    pub fn new(name: &str) -> Result<Digest> {
        let algo = algorithm::get_by_name(name)?;

        let mut ctx: openssl::md_ctx::MdCtx;
        match openssl::md_ctx::MdCtx::new() {
            Err(e) => return Err(Error::InitializationFailed(e.to_string())),
            Ok(c) => ctx = c,
        }

        match ctx.digest_init((algo.evp)()) {
            Err(e) => Err(Error::InitializationFailed(e.to_string())),
            Ok(_) => Ok(Digest {
                name: name.to_string(),
                ctx: Some(ctx),
                value: Vec::new(),
            }),
        }
    }

    // Empty input, input after finalization, and provider faults
    // are all silent no-ops.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        if let Some(ctx) = self.ctx.as_mut() {
            if let Err(e) = ctx.digest_update(data) {
                log::warn!("digest update failed, input dropped: {}", e);
            }
        }
    }

    pub fn append<D: AsRef<[u8]>>(&mut self, data: D) -> &mut Self {
        self.update(data.as_ref());
        self
    }

    pub fn chain<D: AsRef<[u8]>>(mut self, data: D) -> Self {
        self.update(data.as_ref());
        self
    }

    /// Finalizes on first call, releasing the context; later calls
    /// return the stored bytes unchanged.
    pub fn value(&mut self) -> &[u8] {
        if let Some(mut ctx) = self.ctx.take() {
            let mut out = Vec::<u8>::new();
            out.resize(ctx.size(), 0);

            match ctx.digest_final(&mut out) {
                Ok(n) => out.truncate(n),
                Err(e) => {
                    log::warn!("digest finalization failed: {}", e);
                    out.clear();
                }
            }

            self.value = out;
        }

        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
