//! Mock process memory for tests: fixed regions, a read counter and a
//! write log, so tests can assert exactly which fields a tick touched.

use std::cell::Cell;

use crate::error::{Error, Result};
use crate::memory::ProcessMemory;

#[derive(Default)]
pub struct MockMemoryBuilder {
    regions: Vec<(u64, Vec<u8>)>,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, base: u64, bytes: Vec<u8>) -> Self {
        self.regions.push((base, bytes));
        self
    }

    /// An 8-byte region holding a little-endian pointer value.
    pub fn pointer(self, address: u64, target: u64) -> Self {
        self.region(address, target.to_le_bytes().to_vec())
    }

    pub fn build(self) -> MockProcessMemory {
        MockProcessMemory {
            regions: self.regions,
            reads: Cell::new(0),
            writes: Vec::new(),
        }
    }
}

pub struct MockProcessMemory {
    regions: Vec<(u64, Vec<u8>)>,
    reads: Cell<usize>,
    /// (address, length) of every write, in order.
    writes: Vec<(u64, usize)>,
}

impl MockProcessMemory {
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn writes(&self) -> &[(u64, usize)] {
        &self.writes
    }

    pub fn u8_at(&self, address: u64) -> u8 {
        let (i, offset) = self.locate(address, 1).expect("address not mapped in mock");
        self.regions[i].1[offset]
    }

    pub fn f32_at(&self, address: u64) -> f32 {
        let (i, offset) = self.locate(address, 4).expect("address not mapped in mock");
        let bytes = &self.regions[i].1[offset..offset + 4];
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn locate(&self, address: u64, len: usize) -> Option<(usize, usize)> {
        for (i, (base, bytes)) in self.regions.iter().enumerate() {
            if address >= *base {
                let offset = (address - base) as usize;
                if offset + len <= bytes.len() {
                    return Some((i, offset));
                }
            }
        }
        None
    }
}

impl ProcessMemory for MockProcessMemory {
    fn read(&self, address: u64, buf: &mut [u8]) -> Result<()> {
        let (i, offset) = self
            .locate(address, buf.len())
            .ok_or_else(|| Error::MemoryReadFailed {
                address,
                message: "address not mapped in mock".to_string(),
            })?;

        self.reads.set(self.reads.get() + 1);
        buf.copy_from_slice(&self.regions[i].1[offset..offset + buf.len()]);
        Ok(())
    }

    fn write(&mut self, address: u64, bytes: &[u8]) -> Result<()> {
        let (i, offset) = self
            .locate(address, bytes.len())
            .ok_or_else(|| Error::MemoryWriteFailed {
                address,
                message: "address not mapped in mock".to_string(),
            })?;

        self.regions[i].1[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.writes.push((address, bytes.len()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_reads_and_logs_writes() {
        let mut mem = MockMemoryBuilder::new().region(0x100, vec![0u8; 4]).build();

        mem.read_u8(0x102).unwrap();
        mem.write_u8(0x103, 9).unwrap();

        assert_eq!(mem.read_count(), 1);
        assert_eq!(mem.write_count(), 1);
        assert_eq!(mem.writes(), &[(0x103, 1)]);
        assert_eq!(mem.u8_at(0x103), 9);
    }

    #[test]
    fn test_unmapped_access_fails() {
        let mut mem = MockMemoryBuilder::new().region(0x100, vec![0u8; 4]).build();

        assert!(mem.read_u8(0x200).is_err());
        assert!(mem.write_u8(0x0FF, 1).is_err());
        // Reads that cross the region end fail too.
        assert!(mem.read_u64(0x102).is_err());
        assert_eq!(mem.read_count(), 0);
        assert_eq!(mem.write_count(), 0);
    }
}
