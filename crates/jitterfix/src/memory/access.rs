use crate::error::Result;

/// Raw byte access to the host process's address space.
///
/// This is the single seam through which every foreign read and write in
/// the crate passes. The provided accessors use fixed-size stack buffers
/// so the per-tick path never allocates. All multi-byte values are
/// little-endian, matching the host.
pub trait ProcessMemory {
    fn read(&self, address: u64, buf: &mut [u8]) -> Result<()>;

    fn write(&mut self, address: u64, bytes: &[u8]) -> Result<()>;

    fn read_u8(&self, address: u64) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read(address, &mut buf)?;
        Ok(buf[0])
    }

    fn read_u64(&self, address: u64) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read(address, &mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.read(address, &mut buf)?;
        Ok(f32::from_le_bytes(buf))
    }

    fn write_u8(&mut self, address: u64, value: u8) -> Result<()> {
        self.write(address, &[value])
    }

    fn write_f32(&mut self, address: u64, value: f32) -> Result<()> {
        self.write(address, &value.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_typed_accessors_are_little_endian() {
        let mut bytes = vec![0u8; 16];
        bytes[0] = 0x2A;
        bytes[4..8].copy_from_slice(&1.5f32.to_le_bytes());
        bytes[8..16].copy_from_slice(&0x5000u64.to_le_bytes());
        let mem = MockMemoryBuilder::new().region(0x1000, bytes).build();

        assert_eq!(mem.read_u8(0x1000).unwrap(), 0x2A);
        assert_eq!(mem.read_f32(0x1004).unwrap(), 1.5);
        assert_eq!(mem.read_u64(0x1008).unwrap(), 0x5000);
    }

    #[test]
    fn test_typed_writers_round_trip() {
        let mut mem = MockMemoryBuilder::new().region(0x1000, vec![0u8; 8]).build();

        mem.write_u8(0x1000, 7).unwrap();
        mem.write_f32(0x1004, 0.6).unwrap();

        assert_eq!(mem.read_u8(0x1000).unwrap(), 7);
        assert_eq!(mem.read_f32(0x1004).unwrap(), 0.6);
    }
}
