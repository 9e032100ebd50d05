use crate::api::error::EngineError;

/// 32 independent boolean flags addressed by bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityFlags(pub u32);

impl EntityFlags {
    pub const BITS: u32 = 32;

    fn mask(index: u32) -> Result<u32, EngineError> {
        if index < Self::BITS {
            Ok(1 << index)
        } else {
            Err(EngineError::FlagIndexOutOfRange(index))
        }
    }

    pub fn set(&mut self, index: u32) -> Result<(), EngineError> {
        self.0 |= Self::mask(index)?;
        Ok(())
    }

    pub fn clear(&mut self, index: u32) -> Result<(), EngineError> {
        self.0 &= !Self::mask(index)?;
        Ok(())
    }

    pub fn toggle(&mut self, index: u32) -> Result<(), EngineError> {
        self.0 ^= Self::mask(index)?;
        Ok(())
    }

    pub fn get(&self, index: u32) -> Result<bool, EngineError> {
        Ok(self.0 & Self::mask(index)? != 0)
    }

    pub fn assign(&mut self, index: u32, state: bool) -> Result<(), EngineError> {
        if state {
            self.set(index)
        } else {
            self.clear(index)
        }
    }
}
