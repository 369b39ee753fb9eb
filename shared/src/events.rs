/// Sentinel filter id that matches every card.
pub const FILTER_ALL: &str = "all";

/// Fade-out window before a filtered card stops occupying layout.
pub const CARD_HIDE_DELAY_MS: u32 = 180;

/// Visibility phase of an event card under the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Visible,
    /// Carries the filtered-out mark but still occupies layout while the
    /// fade-out runs.
    FadingOut,
    Hidden,
}

/// DOM mutation owed to a card after a filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    /// Unmark filtered-out and restore layout participation, immediately.
    Show,
    /// Mark filtered-out now; layout removal follows after the fade window.
    BeginHide,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub semester: Option<String>,
    pub phase: CardPhase,
}

/// One year-scoped section of the events view with its own filter row.
#[derive(Debug, Clone)]
pub struct Slide {
    pub year: String,
    pub filters: Vec<String>,
    pub active_filter: usize,
    pub cards: Vec<Card>,
}

impl Slide {
    pub fn new(year: String, filters: Vec<String>, semesters: Vec<Option<String>>) -> Self {
        Self {
            year,
            filters,
            active_filter: 0,
            cards: semesters
                .into_iter()
                .map(|semester| Card {
                    semester,
                    phase: CardPhase::Visible,
                })
                .collect(),
        }
    }
}

/// Year switcher plus per-slide semester filter.
///
/// Exactly one slide and one year button are active at any time; each slide
/// carries exactly one active filter. Both invariants are structural here
/// (single index fields) rather than a class-juggling discipline.
#[derive(Debug, Clone)]
pub struct EventsBoard {
    slides: Vec<Slide>,
    active: usize,
}

impl EventsBoard {
    /// `initial_year` is the pre-marked year button from markup, if any;
    /// unknown or absent years fall back to the first slide. Returns `None`
    /// when there are no slides, which disables the whole feature.
    pub fn new(slides: Vec<Slide>, initial_year: Option<&str>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        let active = initial_year
            .and_then(|year| slides.iter().position(|s| s.year == year))
            .unwrap_or(0);
        let mut board = Self { slides, active };
        board.reset_slide(active);
        Some(board)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_year(&self) -> &str {
        &self.slides[self.active].year
    }

    /// Activate the slide for `year`. The arriving slide's filter resets to
    /// its first option and all its cards return to `Visible`; filter state is
    /// not preserved across switches. Unknown years no-op.
    pub fn show_year(&mut self, year: &str) -> bool {
        let Some(idx) = self.slides.iter().position(|s| s.year == year) else {
            return false;
        };
        self.active = idx;
        self.reset_slide(idx);
        true
    }

    fn reset_slide(&mut self, idx: usize) {
        let slide = &mut self.slides[idx];
        slide.active_filter = 0;
        for card in &mut slide.cards {
            card.phase = CardPhase::Visible;
        }
    }

    /// Apply the filter at `filter_idx` on slide `slide_idx`, independent of
    /// which slide is active. Returns one transition per card, in card order.
    pub fn apply_filter(&mut self, slide_idx: usize, filter_idx: usize) -> Vec<CardTransition> {
        let Some(slide) = self.slides.get_mut(slide_idx) else {
            return Vec::new();
        };
        let Some(filter) = slide.filters.get(filter_idx) else {
            return Vec::new();
        };
        let filter = filter.clone();
        slide.active_filter = filter_idx;

        slide
            .cards
            .iter_mut()
            .map(|card| {
                let show =
                    filter == FILTER_ALL || card.semester.as_deref() == Some(filter.as_str());
                if show {
                    card.phase = CardPhase::Visible;
                    CardTransition::Show
                } else if card.phase == CardPhase::Hidden {
                    CardTransition::Unchanged
                } else {
                    card.phase = CardPhase::FadingOut;
                    CardTransition::BeginHide
                }
            })
            .collect()
    }

    /// Complete a card's two-phase hide once its fade window has elapsed.
    /// Returns false if the card was shown again (or the slide reset) in the
    /// meantime, in which case layout must not be touched.
    pub fn finish_hide(&mut self, slide_idx: usize, card_idx: usize) -> bool {
        let Some(card) = self
            .slides
            .get_mut(slide_idx)
            .and_then(|s| s.cards.get_mut(card_idx))
        else {
            return false;
        };
        if card.phase != CardPhase::FadingOut {
            return false;
        }
        card.phase = CardPhase::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{CardPhase, CardTransition, EventsBoard, Slide};

    fn semester_board() -> EventsBoard {
        let slides = vec![
            Slide::new(
                "2024".into(),
                vec!["all".into(), "fall".into(), "spring".into()],
                vec![Some("fall".into()), Some("spring".into()), Some("fall".into())],
            ),
            Slide::new(
                "2025".into(),
                vec!["all".into(), "fall".into()],
                vec![Some("fall".into()), None],
            ),
        ];
        EventsBoard::new(slides, None).expect("two slides")
    }

    #[test]
    fn initial_year_defaults_to_first_slide() {
        let board = semester_board();
        assert_eq!(board.active_year(), "2024");
    }

    #[test]
    fn premarked_year_wins_over_first() {
        let slides = vec![
            Slide::new("2024".into(), vec!["all".into()], vec![]),
            Slide::new("2025".into(), vec!["all".into()], vec![]),
        ];
        let board = EventsBoard::new(slides, Some("2025")).expect("two slides");
        assert_eq!(board.active_year(), "2025");
    }

    #[test]
    fn unknown_premarked_year_falls_back_to_first() {
        let slides = vec![Slide::new("2024".into(), vec!["all".into()], vec![])];
        let board = EventsBoard::new(slides, Some("1999")).expect("one slide");
        assert_eq!(board.active_year(), "2024");
    }

    #[test]
    fn filter_clicks_keep_exactly_one_filter_active() {
        let mut board = semester_board();
        for clicks in [1usize, 2, 1, 0, 2] {
            board.apply_filter(0, clicks);
            assert_eq!(board.slides()[0].active_filter, clicks);
        }
    }

    #[test]
    fn all_then_fall_runs_the_two_phase_scenario() {
        let mut board = semester_board();

        let all = board.apply_filter(0, 0);
        assert!(all.iter().all(|t| *t == CardTransition::Show));
        assert!(
            board.slides()[0]
                .cards
                .iter()
                .all(|c| c.phase == CardPhase::Visible)
        );

        let fall = board.apply_filter(0, 1);
        assert_eq!(
            fall,
            vec![
                CardTransition::Show,
                CardTransition::BeginHide,
                CardTransition::Show,
            ]
        );
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::FadingOut);

        assert!(board.finish_hide(0, 1));
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::Hidden);
    }

    #[test]
    fn reapplying_a_filter_leaves_hidden_cards_alone() {
        let mut board = semester_board();
        board.apply_filter(0, 1);
        board.finish_hide(0, 1);

        let again = board.apply_filter(0, 1);
        assert_eq!(again[1], CardTransition::Unchanged);
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::Hidden);
    }

    #[test]
    fn untagged_cards_only_match_the_all_sentinel() {
        let mut board = semester_board();
        let fall = board.apply_filter(1, 1);
        assert_eq!(fall, vec![CardTransition::Show, CardTransition::BeginHide]);

        let all = board.apply_filter(1, 0);
        assert_eq!(all, vec![CardTransition::Show, CardTransition::Show]);
    }

    #[test]
    fn year_switch_resets_the_arriving_slide() {
        let mut board = semester_board();
        board.apply_filter(1, 1);
        board.finish_hide(1, 1);

        assert!(board.show_year("2025"));
        assert_eq!(board.active_year(), "2025");
        let slide = &board.slides()[1];
        assert_eq!(slide.active_filter, 0);
        assert!(slide.cards.iter().all(|c| c.phase == CardPhase::Visible));
    }

    #[test]
    fn year_switch_to_unknown_year_is_a_no_op() {
        let mut board = semester_board();
        assert!(!board.show_year("1999"));
        assert_eq!(board.active_year(), "2024");
    }

    #[test]
    fn finish_hide_is_ignored_after_a_reshow() {
        let mut board = semester_board();
        board.apply_filter(0, 1);
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::FadingOut);

        // Card is shown again before its fade window elapses.
        board.apply_filter(0, 2);
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::Visible);

        assert!(!board.finish_hide(0, 1), "stale hide must not complete");
        assert_eq!(board.slides()[0].cards[1].phase, CardPhase::Visible);
    }

    #[test]
    fn out_of_range_indices_are_tolerated() {
        let mut board = semester_board();
        assert!(board.apply_filter(9, 0).is_empty());
        assert!(board.apply_filter(0, 9).is_empty());
        assert_eq!(board.slides()[0].active_filter, 0, "invalid filter index must not stick");
        assert!(!board.finish_hide(9, 9));
    }
}
