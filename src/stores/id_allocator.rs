/// Issues user ids starting at 1
///
/// Ids are strictly increasing and are never handed out twice, even after the
/// record they belonged to is deleted.
#[derive(Debug)]
pub struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
