/// Client-owned storage for the serialized open-tab list (a single scoped key).
///
/// Values read back are untrusted; callers parse them defensively.
pub trait TabStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: String);
}

impl<T: TabStore + ?Sized> TabStore for &mut T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, value: String) {
        (**self).save(value)
    }
}
