//! Zwei-Punkt-Auswahl (Start/Ziel) als Zustandsmaschine.

use super::GeoPoint;

/// Abgeleiteter Zustand der Auswahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Kein Punkt gewählt
    Empty,
    /// Nur Startpunkt gewählt
    StartSet,
    /// Start und Ziel gewählt
    BothSet,
}

/// Ergebnis eines Kartenklicks auf die Auswahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTransition {
    /// Zustand vor dem Klick
    pub from: SelectionPhase,
    /// Zustand nach dem Klick
    pub to: SelectionPhase,
}

impl SelectionTransition {
    /// Gibt `true` zurück, wenn der Klick den Zustand `BothSet` verlassen hat.
    pub fn left_both_set(&self) -> bool {
        self.from == SelectionPhase::BothSet && self.to != SelectionPhase::BothSet
    }
}

/// Aktuelle Start/Ziel-Auswahl.
///
/// Invariante: `end` ist nur gesetzt, wenn auch `start` gesetzt ist.
/// Mutation nur über [`Selection::click`] und [`Selection::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    start: Option<GeoPoint>,
    end: Option<GeoPoint>,
}

impl Selection {
    /// Erstellt eine leere Auswahl.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startpunkt
    pub fn start(&self) -> Option<GeoPoint> {
        self.start
    }

    /// Zielpunkt
    pub fn end(&self) -> Option<GeoPoint> {
        self.end
    }

    /// Leitet den Zustand aus den gesetzten Punkten ab.
    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::StartSet,
            (Some(_), Some(_)) => SelectionPhase::BothSet,
        }
    }

    /// Gibt `true` zurück, wenn Start und Ziel gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.phase() == SelectionPhase::BothSet
    }

    /// Verarbeitet einen Kartenklick:
    /// `Empty → StartSet`, `StartSet → BothSet`, `BothSet → StartSet` (neuer Start, Ziel gelöscht).
    pub fn click(&mut self, point: GeoPoint) -> SelectionTransition {
        let from = self.phase();
        match from {
            SelectionPhase::Empty => self.start = Some(point),
            SelectionPhase::StartSet => self.end = Some(point),
            SelectionPhase::BothSet => {
                self.start = Some(point);
                self.end = None;
            }
        }
        SelectionTransition {
            from,
            to: self.phase(),
        }
    }

    /// Setzt die Auswahl unabhängig vom Zustand auf `Empty` zurück.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u32) -> GeoPoint {
        GeoPoint::new(-22.9 - f64::from(i) * 0.01, -42.8)
    }

    #[test]
    fn odd_clicks_start_even_clicks_end() {
        let mut selection = Selection::new();
        for n in 1..=9u32 {
            selection.click(p(n));
            if n % 2 == 1 {
                assert_eq!(selection.start(), Some(p(n)));
                assert_eq!(selection.end(), None);
            } else {
                assert_eq!(selection.start(), Some(p(n - 1)));
                assert_eq!(selection.end(), Some(p(n)));
            }
        }
    }

    #[test]
    fn cycle_without_clear_keeps_alternating() {
        let mut selection = Selection::new();
        selection.click(p(1));
        selection.click(p(2));
        selection.click(p(3));
        let t = selection.click(p(4));

        assert_eq!(t.from, SelectionPhase::StartSet);
        assert_eq!(t.to, SelectionPhase::BothSet);
        assert_eq!(selection.start(), Some(p(3)));
        assert_eq!(selection.end(), Some(p(4)));
    }

    #[test]
    fn clear_returns_to_empty_from_any_phase() {
        let mut selection = Selection::new();
        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::Empty);

        selection.click(p(1));
        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::Empty);

        selection.click(p(1));
        selection.click(p(2));
        selection.clear();
        assert_eq!(selection, Selection::new());
    }

    #[test]
    fn only_leaving_both_set_is_flagged() {
        let mut selection = Selection::new();
        assert!(!selection.click(p(1)).left_both_set());
        assert!(!selection.click(p(2)).left_both_set());
        assert!(selection.click(p(3)).left_both_set());
    }
}
