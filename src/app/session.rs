//! View-state controller: active tab, current prompt, results panel

use crate::types::{AnalysisReport, PromptResult};
use std::time::{Duration, Instant};

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Generate,
    Improve,
    Analyze,
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate",
            Tab::Improve => "Improve",
            Tab::Analyze => "Analyze",
            Tab::History => "History",
        }
    }
}

/// Score label tiers. Total over the 0-100 range the backend returns.
pub fn score_label(score: i64) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 80 {
        "Very Good"
    } else if score >= 70 {
        "Good"
    } else if score >= 60 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

const SCORE_ANIM_DURATION: Duration = Duration::from_millis(1000);

/// Count-up animation from 0 to the target score. Purely cosmetic;
/// monotone and guaranteed to end exactly at the target.
#[derive(Debug, Clone)]
pub struct ScoreAnimation {
    started: Instant,
    target: i64,
}

impl ScoreAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            started: Instant::now(),
            target,
        }
    }

    pub fn current(&self) -> i64 {
        self.value_at(self.started.elapsed())
    }

    pub fn finished(&self) -> bool {
        self.started.elapsed() >= SCORE_ANIM_DURATION
    }

    fn value_at(&self, elapsed: Duration) -> i64 {
        if self.target <= 0 {
            return self.target.max(0);
        }
        let fraction = (elapsed.as_secs_f32() / SCORE_ANIM_DURATION.as_secs_f32()).min(1.0);
        ((self.target as f32 * fraction).round() as i64).min(self.target)
    }
}

/// Transient copy of a backend result, held only for rendering
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub prompt_text: String,
    pub analysis: String,
    pub score: i64,
    pub score_anim: ScoreAnimation,
}

impl ResultsView {
    fn new(prompt_text: String, analysis: String, score: i64) -> Self {
        Self {
            prompt_text,
            analysis,
            score,
            score_anim: ScoreAnimation::new(score),
        }
    }
}

/// Session state owned by the controller, never ambient.
///
/// `current_prompt_id` changes only on successful generate / improve /
/// history-item loads; analyze results deliberately leave it untouched
/// since the backend does not persist them in that flow.
pub struct SessionState {
    current_tab: Tab,
    current_prompt_id: Option<i64>,
    results: Option<ResultsView>,
    results_visible: bool,
    history_fetch_queued: bool,
    scroll_to_results: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Generate,
            current_prompt_id: None,
            results: None,
            results_visible: false,
            history_fetch_queued: false,
            scroll_to_results: false,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn current_prompt_id(&self) -> Option<i64> {
        self.current_prompt_id
    }

    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Tab switch: hides the results panel (view only, underlying state
    /// kept) and queues a history fetch when entering the History tab.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.results_visible = false;
        if tab == Tab::History {
            self.history_fetch_queued = true;
        }
    }

    /// Consumes the queued history fetch, if any.
    pub fn take_history_fetch(&mut self) -> bool {
        std::mem::take(&mut self.history_fetch_queued)
    }

    /// One-shot request to bring the freshly shown results into view.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_results)
    }

    pub fn hide_results(&mut self) {
        self.results_visible = false;
    }

    /// Successful generate or improve: show results, adopt the new id.
    pub fn show_generated(&mut self, result: &PromptResult) {
        self.results = Some(ResultsView::new(
            result.generated_prompt.clone(),
            result.analysis.clone(),
            result.score,
        ));
        self.results_visible = true;
        self.scroll_to_results = true;
        self.current_prompt_id = Some(result.id);
    }

    /// Successful analyze: echo the analyzed text with the report.
    /// No id involved - the prompt was not persisted.
    pub fn show_analysis(&mut self, analyzed_text: String, report: &AnalysisReport) {
        self.results = Some(ResultsView::new(
            analyzed_text,
            report.analysis.clone(),
            report.score,
        ));
        self.results_visible = true;
        self.scroll_to_results = true;
    }

    /// Historical prompt loaded from the backend by id.
    pub fn show_history_item(&mut self, result: &PromptResult) {
        self.show_generated(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_result(id: i64, score: i64) -> PromptResult {
        PromptResult {
            id,
            generated_prompt: "Act as an expert copywriter".into(),
            analysis: "Clear role framing".into(),
            score,
            original_input: "write a blog post".into(),
            ai_tool: "chatgpt".into(),
            category: "marketing".into(),
            created_at: None,
        }
    }

    #[test]
    fn initial_state() {
        let session = SessionState::new();
        assert_eq!(session.current_tab(), Tab::Generate);
        assert_eq!(session.current_prompt_id(), None);
        assert!(!session.results_visible());
        assert!(session.results().is_none());
    }

    #[test]
    fn score_label_boundaries() {
        assert_eq!(score_label(0), "Needs Improvement");
        assert_eq!(score_label(59), "Needs Improvement");
        assert_eq!(score_label(60), "Fair");
        assert_eq!(score_label(69), "Fair");
        assert_eq!(score_label(70), "Good");
        assert_eq!(score_label(79), "Good");
        assert_eq!(score_label(80), "Very Good");
        assert_eq!(score_label(89), "Very Good");
        assert_eq!(score_label(90), "Excellent");
        assert_eq!(score_label(100), "Excellent");
    }

    #[test]
    fn generate_success_sets_id_and_shows_results() {
        let mut session = SessionState::new();
        session.show_generated(&prompt_result(42, 85));
        assert_eq!(session.current_prompt_id(), Some(42));
        assert!(session.results_visible());
        assert!(session.take_scroll_request());
        assert!(!session.take_scroll_request());
        let results = session.results().unwrap();
        assert_eq!(results.score, 85);
        assert_eq!(score_label(results.score), "Very Good");
    }

    #[test]
    fn analyze_never_touches_prompt_id() {
        let mut session = SessionState::new();
        let report = AnalysisReport {
            analysis: "Too vague".into(),
            score: 55,
        };
        session.show_analysis("my old prompt".into(), &report);
        assert!(session.results_visible());
        assert_eq!(session.current_prompt_id(), None);

        // An earlier generate id also survives a later analyze
        session.show_generated(&prompt_result(7, 90));
        session.show_analysis("another".into(), &report);
        assert_eq!(session.current_prompt_id(), Some(7));
    }

    #[test]
    fn history_item_adopts_id() {
        let mut session = SessionState::new();
        session.show_history_item(&prompt_result(13, 72));
        assert_eq!(session.current_prompt_id(), Some(13));
        assert!(session.results_visible());
    }

    #[test]
    fn tab_switch_always_hides_results() {
        let mut session = SessionState::new();
        session.show_generated(&prompt_result(1, 80));
        assert!(session.results_visible());

        session.switch_tab(Tab::Improve);
        assert!(!session.results_visible());
        // Hidden, not cleared: the underlying state survives
        assert!(session.results().is_some());
        assert_eq!(session.current_prompt_id(), Some(1));

        session.switch_tab(Tab::Generate);
        assert!(!session.results_visible());
    }

    #[test]
    fn history_tab_queues_exactly_one_fetch() {
        let mut session = SessionState::new();
        session.switch_tab(Tab::History);
        assert!(session.take_history_fetch());
        assert!(!session.take_history_fetch());

        session.switch_tab(Tab::Generate);
        assert!(!session.take_history_fetch());

        session.switch_tab(Tab::History);
        assert!(session.take_history_fetch());
    }

    #[test]
    fn score_animation_is_monotone_and_exact() {
        let anim = ScoreAnimation::new(85);
        let mut last = -1;
        for ms in (0..=1500).step_by(20) {
            let value = anim.value_at(Duration::from_millis(ms));
            assert!(value >= last, "animation went backwards at {}ms", ms);
            assert!(value <= 85);
            last = value;
        }
        assert_eq!(anim.value_at(Duration::from_millis(1000)), 85);
        assert_eq!(anim.value_at(Duration::from_millis(5000)), 85);
        assert_eq!(anim.value_at(Duration::ZERO), 0);
    }

    #[test]
    fn score_animation_zero_target() {
        let anim = ScoreAnimation::new(0);
        assert_eq!(anim.value_at(Duration::ZERO), 0);
        assert_eq!(anim.value_at(Duration::from_millis(2000)), 0);
    }
}
