pub trait ChangeMinMax {
    /// Replaces `self` with `v` if `v` is strictly smaller. Returns whether it changed.
    fn change_min(&mut self, v: Self) -> bool;

    /// Replaces `self` with `v` if `v` is strictly larger. Returns whether it changed.
    fn change_max(&mut self, v: Self) -> bool;
}

impl<T: PartialOrd> ChangeMinMax for T {
    fn change_min(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }

    fn change_max(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}
