/// Focus stops of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusTarget {
    CompanySelector,
    Field(usize),
    Submit,
}

/// Cyclic focus over the selector, the active fields and the submit action.
/// The form part only exists once a company is selected.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FocusRing {
    index: usize,
}

impl FocusRing {
    pub(crate) fn current(&self, field_count: usize, form_visible: bool) -> FocusTarget {
        let stops = stop_count(field_count, form_visible);
        let index = self.index.min(stops - 1);
        target_at(index, field_count)
    }

    pub(crate) fn step(&mut self, delta: i32, field_count: usize, form_visible: bool) {
        let stops = stop_count(field_count, form_visible) as i32;
        let current = self.index.min(stops as usize - 1) as i32;
        self.index = (((current + delta) % stops + stops) % stops) as usize;
    }

    pub(crate) fn focus_first_field(&mut self) {
        self.index = 1;
    }
}

fn stop_count(field_count: usize, form_visible: bool) -> usize {
    if form_visible { field_count + 2 } else { 1 }
}

fn target_at(index: usize, field_count: usize) -> FocusTarget {
    match index {
        0 => FocusTarget::CompanySelector,
        idx if idx <= field_count => FocusTarget::Field(idx - 1),
        _ => FocusTarget::Submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selector_before_selection() {
        let mut ring = FocusRing::default();
        ring.step(1, 3, false);
        assert_eq!(ring.current(3, false), FocusTarget::CompanySelector);
    }

    #[test]
    fn cycles_through_fields_and_submit() {
        let mut ring = FocusRing::default();
        ring.step(1, 2, true);
        assert_eq!(ring.current(2, true), FocusTarget::Field(0));
        ring.step(2, 2, true);
        assert_eq!(ring.current(2, true), FocusTarget::Submit);
        ring.step(1, 2, true);
        assert_eq!(ring.current(2, true), FocusTarget::CompanySelector);
        ring.step(-1, 2, true);
        assert_eq!(ring.current(2, true), FocusTarget::Submit);
    }

    #[test]
    fn empty_form_still_offers_submit() {
        let mut ring = FocusRing::default();
        ring.focus_first_field();
        assert_eq!(ring.current(0, true), FocusTarget::Submit);
    }
}
