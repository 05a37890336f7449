//! The state blob handed from the emulator core to the host.

/// A named snapshot of emulated machine state.
///
/// The payload is opaque. It is only meaningful to the emulator core that produced it and to
/// the host storage that keeps it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateBlob {
    pub name: String,
    pub payload: Vec<u8>,
}

impl StateBlob {
    pub fn new(name: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.payload)
    }
}
