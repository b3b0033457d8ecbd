use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// One visible row: which item, how well it matched, and which label
/// characters (char indices) to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub score: i64,
    pub positions: Vec<usize>,
}

/// State of the fuzzy multi-select picker.
pub struct Picker {
    labels: Vec<String>,
    query: String,
    matches: Vec<Match>,
    /// Position within `matches`.
    cursor: usize,
    /// Item indices in the order they were marked.
    marked: Vec<usize>,
    matcher: SkimMatcherV2,
}

impl Picker {
    pub fn new(labels: Vec<String>) -> Self {
        let mut picker = Self {
            labels,
            query: String::new(),
            matches: Vec::new(),
            cursor: 0,
            marked: Vec::new(),
            matcher: SkimMatcherV2::default(),
        };
        picker.refilter();
        picker
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn marked(&self) -> &[usize] {
        &self.marked
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Item index under the cursor, if any row is visible.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.cursor).map(|m| m.index)
    }

    // ── Query editing ─────────────────────────────────────────────────

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    // ── Navigation ────────────────────────────────────────────────────

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.matches.len() {
            self.cursor += 1;
        }
    }

    /// Flip the mark on the current item, then advance.
    pub fn toggle_mark(&mut self) {
        let Some(index) = self.current() else {
            return;
        };
        if let Some(pos) = self.marked.iter().position(|&i| i == index) {
            self.marked.remove(pos);
        } else {
            self.marked.push(index);
        }
        self.move_down();
    }

    /// Indices to act on: marked items in mark order, otherwise the item
    /// under the cursor. `None` when there is nothing to confirm.
    pub fn confirm(&self) -> Option<Vec<usize>> {
        if !self.marked.is_empty() {
            return Some(self.marked.clone());
        }
        self.current().map(|i| vec![i])
    }

    /// Recompute visible rows for the current query.
    ///
    /// Whitespace separates terms; a row must match every term. An empty
    /// query shows all items in their original order.
    fn refilter(&mut self) {
        let terms: Vec<&str> = self.query.split_whitespace().collect();

        self.matches = if terms.is_empty() {
            (0..self.labels.len())
                .map(|index| Match {
                    index,
                    score: 0,
                    positions: Vec::new(),
                })
                .collect()
        } else {
            let mut found: Vec<Match> = self
                .labels
                .iter()
                .enumerate()
                .filter_map(|(index, label)| {
                    let mut score = 0;
                    let mut positions = Vec::new();
                    for term in &terms {
                        let (s, p) = self.matcher.fuzzy_indices(label, term)?;
                        score += s;
                        positions.extend(p);
                    }
                    positions.sort_unstable();
                    positions.dedup();
                    Some(Match {
                        index,
                        score,
                        positions,
                    })
                })
                .collect();
            // Stable: equal scores keep original order.
            found.sort_by(|a, b| b.score.cmp(&a.score));
            found
        };

        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(labels: &[&str]) -> Picker {
        Picker::new(labels.iter().map(|l| l.to_string()).collect())
    }

    fn visible(p: &Picker) -> Vec<usize> {
        p.matches().iter().map(|m| m.index).collect()
    }

    fn type_str(p: &mut Picker, s: &str) {
        for c in s.chars() {
            p.push_char(c);
        }
    }

    #[test]
    fn empty_query_shows_everything_in_order() {
        let p = picker(&["a: web", "b: db", "c: cache"]);
        assert_eq!(visible(&p), [0, 1, 2]);
        assert_eq!(p.current(), Some(0));
    }

    #[test]
    fn query_filters_to_matching_rows() {
        let mut p = picker(&["abcdef1234: web", "1122334455: db", "9988776655: webhook"]);
        type_str(&mut p, "web");
        let rows = visible(&p);
        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&0));
        assert!(rows.contains(&2));
    }

    #[test]
    fn match_positions_point_at_label_chars() {
        let mut p = picker(&["xx: db"]);
        type_str(&mut p, "db");
        let m = &p.matches()[0];
        let label: Vec<char> = p.labels()[0].chars().collect();
        let hit: String = m.positions.iter().map(|&i| label[i]).collect();
        assert_eq!(hit, "db");
    }

    #[test]
    fn every_term_must_match() {
        let mut p = picker(&["aa: web-front", "bb: web-back", "cc: db-front"]);
        type_str(&mut p, "web front");
        assert_eq!(visible(&p), [0]);
    }

    #[test]
    fn no_match_leaves_nothing_to_confirm() {
        let mut p = picker(&["aa: web"]);
        type_str(&mut p, "zzz");
        assert!(p.matches().is_empty());
        assert_eq!(p.current(), None);
        assert_eq!(p.confirm(), None);
    }

    #[test]
    fn backspace_and_clear_restore_rows() {
        let mut p = picker(&["aa: web", "bb: db"]);
        type_str(&mut p, "dbx");
        assert!(p.matches().is_empty());
        p.pop_char();
        assert_eq!(visible(&p), [1]);
        p.clear_query();
        assert_eq!(visible(&p), [0, 1]);
        assert_eq!(p.query(), "");
    }

    #[test]
    fn cursor_is_clamped() {
        let mut p = picker(&["a", "b"]);
        p.move_up();
        assert_eq!(p.cursor(), 0);
        p.move_down();
        p.move_down();
        p.move_down();
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn query_change_resets_cursor() {
        let mut p = picker(&["aa: web", "bb: web2", "cc: db"]);
        p.move_down();
        p.move_down();
        p.push_char('w');
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn confirm_without_marks_takes_cursor_row() {
        let mut p = picker(&["a", "b", "c"]);
        p.move_down();
        assert_eq!(p.confirm(), Some(vec![1]));
    }

    #[test]
    fn marks_are_returned_in_mark_order() {
        let mut p = picker(&["a", "b", "c"]);
        p.move_down();
        p.move_down();
        p.toggle_mark(); // c
        p.move_up();
        p.move_up();
        p.toggle_mark(); // a
        assert_eq!(p.marked(), [2, 0]);
        assert_eq!(p.confirm(), Some(vec![2, 0]));
    }

    #[test]
    fn toggle_twice_unmarks() {
        let mut p = picker(&["a", "b"]);
        p.toggle_mark();
        assert!(p.is_marked(0));
        p.move_up();
        p.toggle_mark();
        assert!(!p.is_marked(0));
        assert!(p.marked().is_empty());
    }

    #[test]
    fn marks_survive_filtering() {
        let mut p = picker(&["aa: web", "bb: db"]);
        p.toggle_mark();
        type_str(&mut p, "db");
        assert_eq!(visible(&p), [1]);
        assert_eq!(p.confirm(), Some(vec![0]));
    }

    #[test]
    fn empty_picker_is_inert() {
        let mut p = picker(&[]);
        p.move_down();
        p.toggle_mark();
        assert_eq!(p.current(), None);
        assert_eq!(p.confirm(), None);
    }
}
