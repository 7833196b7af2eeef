//! Channel-agnostic conversational flow: one state machine that walks the
//! intake steps and then the full question catalog, producing the answer set
//! the orchestrator consumes. Text chat and voice transcripts drive the same
//! driver; only the transport differs.
//!
//! The driver does not own an orchestrator. When the question walk finishes
//! it emits [`FlowAction::RunAnalysis`]; the caller runs the analysis and
//! hands the outcome back via [`FlowDriver::complete`] or
//! [`FlowDriver::fail`].

use crate::answer::AnswerSet;
use crate::catalog;
use crate::dimension::{Dimension, Question};
use crate::parse;
use crate::report::{AssessmentContext, AssessmentData, AssessmentResult};
use crate::types::{Category, QuestionKind};
use serde::Serialize;

// ---------------------------------------------------------------------------
// FlowState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Initial,
    Greeting,
    CollectingBasicInfo,
    CollectingCompanyInfo,
    CollectingChallenges,
    Assessment,
    PerformingAnalysis,
    Completed,
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Progress tuple consumed by progress-bar UI components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current_category: usize,
    pub total_categories: usize,
    pub completed_dimensions: usize,
    pub total_dimensions: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryStatus {
    pub category: Category,
    pub completed: bool,
    pub current: bool,
    pub locked: bool,
}

// ---------------------------------------------------------------------------
// FlowReply
// ---------------------------------------------------------------------------

/// What the driver wants the caller to do next.
#[derive(Debug, Clone)]
pub enum FlowAction {
    /// The answer walk is finished; run the orchestrator with this input.
    RunAnalysis(AssessmentData),
}

#[derive(Debug, Clone)]
pub struct FlowReply {
    pub message: String,
    pub state: FlowState,
    /// Quick-reply chips for UI channels; voice channels ignore them.
    pub suggestions: Vec<&'static str>,
    pub progress: Option<Progress>,
    pub action: Option<FlowAction>,
}

impl FlowReply {
    fn message(message: impl Into<String>, state: FlowState) -> Self {
        Self {
            message: message.into(),
            state,
            suggestions: Vec::new(),
            progress: None,
            action: None,
        }
    }

    fn with_suggestions(mut self, suggestions: &[&'static str]) -> Self {
        self.suggestions = suggestions.to_vec();
        self
    }
}

// ---------------------------------------------------------------------------
// FlowDriver
// ---------------------------------------------------------------------------

pub struct FlowDriver {
    organization_id: String,
    state: FlowState,
    dimension_index: usize,
    question_index: usize,
    category_index: usize,
    responses: AnswerSet,
    name: String,
    company: String,
    industry: String,
    size: String,
    region: String,
    challenges: Vec<String>,
    assessment_started: bool,
}

impl FlowDriver {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            state: FlowState::Initial,
            dimension_index: 0,
            question_index: 0,
            category_index: 0,
            responses: AnswerSet::new(),
            name: String::new(),
            company: String::new(),
            industry: "General".to_string(),
            size: "Medium".to_string(),
            region: "Global".to_string(),
            challenges: Vec::new(),
            assessment_started: false,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn responses(&self) -> &AnswerSet {
        &self.responses
    }

    /// The question the driver is currently waiting on, if any.
    pub fn current_question(&self) -> Option<(&'static Dimension, &'static Question)> {
        if self.state != FlowState::Assessment || !self.assessment_started {
            return None;
        }
        let dimension = catalog::catalog().get(self.dimension_index)?;
        let question = dimension.questions.get(self.question_index)?;
        Some((dimension, question))
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current_category: self.category_index,
            total_categories: Category::all().len(),
            completed_dimensions: self.dimension_index.min(catalog::catalog().len()),
            total_dimensions: catalog::catalog().len(),
        }
    }

    pub fn category_statuses(&self) -> Vec<CategoryStatus> {
        Category::all()
            .iter()
            .enumerate()
            .map(|(i, &category)| CategoryStatus {
                category,
                completed: i < self.category_index,
                current: i == self.category_index,
                locked: i > self.category_index,
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // State machine
    // -----------------------------------------------------------------------

    pub fn advance(&mut self, input: &str) -> FlowReply {
        match self.state {
            FlowState::Initial | FlowState::Greeting => self.handle_greeting(),
            FlowState::CollectingBasicInfo => self.handle_basic_info(input),
            FlowState::CollectingCompanyInfo => self.handle_company_info(input),
            FlowState::CollectingChallenges => self.handle_challenges(input),
            FlowState::Assessment => self.handle_assessment(input),
            FlowState::PerformingAnalysis => FlowReply::message(
                "I'm analyzing your responses now. One moment while I prepare your maturity report.",
                FlowState::PerformingAnalysis,
            ),
            FlowState::Completed => FlowReply::message(
                "Your assessment is complete. Ask for the full report, key recommendations, or next steps.",
                FlowState::Completed,
            )
            .with_suggestions(&["Show Full Report", "Key Recommendations", "Next Steps"]),
        }
    }

    fn handle_greeting(&mut self) -> FlowReply {
        self.state = FlowState::CollectingBasicInfo;
        FlowReply::message(
            "Welcome to the AI Maturity Assessment! I'm here to help you understand your \
             organization's AI readiness and create a personalized transformation roadmap. \
             Let's start with your name.",
            FlowState::CollectingBasicInfo,
        )
        .with_suggestions(&["Get Started", "Learn More"])
    }

    fn handle_basic_info(&mut self, input: &str) -> FlowReply {
        self.name = extract_name(input);
        self.state = FlowState::CollectingCompanyInfo;
        FlowReply::message(
            format!(
                "Great to meet you, {}! To provide the most relevant insights, could you tell \
                 me about your organization?",
                self.name
            ),
            FlowState::CollectingCompanyInfo,
        )
        .with_suggestions(&["Small Business", "Enterprise", "Startup", "Non-Profit"])
    }

    fn handle_company_info(&mut self, input: &str) -> FlowReply {
        self.company = extract_company(input);
        self.size = detect_company_size(input);
        self.industry = detect_industry(input);
        self.state = FlowState::CollectingChallenges;
        FlowReply::message(
            format!(
                "Thank you! {} sounds like an exciting organization. What are your main \
                 challenges or goals regarding AI adoption?",
                self.company
            ),
            FlowState::CollectingChallenges,
        )
        .with_suggestions(&[
            "Improving efficiency",
            "Reducing costs",
            "Enhancing customer experience",
            "Staying competitive",
        ])
    }

    fn handle_challenges(&mut self, input: &str) -> FlowReply {
        self.challenges = extract_challenges(input);
        self.state = FlowState::Assessment;
        let mut reply = FlowReply::message(
            format!(
                "I understand. To help {} with {}, I'll guide you through our AI maturity \
                 assessment. It covers 4 key areas and takes about 10-15 minutes. Ready to begin?",
                self.company, self.challenges[0]
            ),
            FlowState::Assessment,
        )
        .with_suggestions(&["Let's start!", "Tell me more", "What areas?"]);
        reply.progress = Some(self.progress());
        reply
    }

    fn handle_assessment(&mut self, input: &str) -> FlowReply {
        if !self.assessment_started {
            self.assessment_started = true;
            let (dimension, question) = self
                .current_question()
                .expect("catalog is never empty");
            let mut reply = FlowReply::message(
                format!(
                    "Great! Let's begin with your technical foundation. {}",
                    question_prompt(dimension, question)
                ),
                FlowState::Assessment,
            );
            reply.progress = Some(self.progress());
            return reply;
        }

        let (dimension, question) = self
            .current_question()
            .expect("assessment state always has a current question");

        let Some(answer) = parse::parse_answer(input, question) else {
            // Unclear yes/no: re-prompt without advancing.
            let mut reply = FlowReply::message(
                format!(
                    "I want to make sure I capture that correctly - is that a yes or a no? {}",
                    question.text
                ),
                FlowState::Assessment,
            );
            reply.progress = Some(self.progress());
            return reply;
        };
        self.responses.insert(question.id.to_string(), answer);
        self.advance_question(dimension);

        if self.dimension_index >= catalog::catalog().len() {
            self.state = FlowState::PerformingAnalysis;
            tracing::debug!(
                organization = %self.organization_id,
                answers = self.responses.len(),
                "question walk complete; handing off to analysis"
            );
            let mut reply = FlowReply::message(
                "Excellent! I've gathered everything I need. Let me analyze your responses and \
                 generate your personalized AI maturity report...",
                FlowState::PerformingAnalysis,
            );
            reply.progress = Some(self.progress());
            reply.action = Some(FlowAction::RunAnalysis(self.assessment_data()));
            return reply;
        }

        let (next_dimension, next_question) = self
            .current_question()
            .expect("dimension index bounds-checked above");
        let mut reply = FlowReply::message(
            question_prompt(next_dimension, next_question),
            FlowState::Assessment,
        );
        reply.progress = Some(self.progress());
        reply
    }

    /// Step to the next question, rolling over dimension and category
    /// boundaries.
    fn advance_question(&mut self, dimension: &'static Dimension) {
        self.question_index += 1;
        if self.question_index < dimension.questions.len() {
            return;
        }
        self.question_index = 0;
        self.dimension_index += 1;

        // Category boundary: advance once every dimension in the current
        // category has all of its questions answered.
        if let Some(&category) = Category::all().get(self.category_index) {
            let complete = catalog::by_category(category)
                .all(|d| d.questions.iter().all(|q| self.responses.contains_key(q.id)));
            if complete && self.category_index < Category::all().len() - 1 {
                self.category_index += 1;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Analysis hand-off
    // -----------------------------------------------------------------------

    pub fn assessment_data(&self) -> AssessmentData {
        AssessmentData {
            organization_id: self.organization_id.clone(),
            responses: self.responses.clone(),
            context: AssessmentContext {
                industry: self.industry.clone(),
                size: self.size.clone(),
                region: self.region.clone(),
                current_challenges: self.challenges.clone(),
            },
        }
    }

    /// Render the completion summary for a finished analysis.
    pub fn complete(&mut self, result: &AssessmentResult) -> String {
        self.state = FlowState::Completed;
        format!(
            "Assessment complete! Your organization is at Level {}: {}. This places you {}. \
             Would you like to see your detailed results and personalized roadmap?",
            result.overall_maturity_level,
            result.maturity.name,
            maturity_context(result.overall_maturity_level)
        )
    }

    /// Fallback when the analysis itself failed; the conversation still ends
    /// cleanly instead of hanging.
    pub fn fail(&mut self) -> String {
        self.state = FlowState::Completed;
        "I've completed the assessment conversation, but the analysis couldn't be generated \
         right now. Your responses are saved and our team will follow up with your results."
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Prompt rendering
// ---------------------------------------------------------------------------

fn question_prompt(dimension: &Dimension, question: &Question) -> String {
    let intro = dimension_intro(dimension.id);
    let body = match question.kind {
        QuestionKind::Scale => format!(
            "{} On a scale of 0 to 10, where 0 means \"not at all\" and 10 means \"fully \
             implemented\", how would you rate your organization?",
            question.text
        ),
        QuestionKind::YesNo => format!(
            "{} Is this something your organization currently has in place?",
            question.text
        ),
        QuestionKind::MultipleChoice => format!(
            "{} Your options are: {}. Which best describes your organization?",
            question.text,
            question.options.join(", ")
        ),
        QuestionKind::Text => format!(
            "{} Please share your experience or current approach.",
            question.text
        ),
    };
    if intro.is_empty() {
        body
    } else {
        format!("{intro} {body}")
    }
}

fn dimension_intro(id: &str) -> &'static str {
    match id {
        "tech_infrastructure" => "This helps us understand your technical foundation.",
        "data_quality" => "Data is the fuel for AI - let's assess your data readiness.",
        "leadership_vision" => "Leadership commitment is crucial for AI success.",
        "skills_talent" => "Having the right skills is key to AI adoption.",
        _ => "",
    }
}

fn maturity_context(level: u8) -> &'static str {
    match level {
        0..=2 => "in the early stages of AI adoption, with significant growth potential",
        3..=5 => "on a solid AI journey, ahead of many organizations",
        6..=7 => "among the AI leaders in your industry",
        _ => "at the forefront of AI innovation globally",
    }
}

// ---------------------------------------------------------------------------
// Intake heuristics
// ---------------------------------------------------------------------------

fn extract_name(input: &str) -> String {
    input
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| "there".to_string())
}

fn extract_company(input: &str) -> String {
    input
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| "Your organization".to_string())
}

fn detect_company_size(input: &str) -> String {
    let lower = input.to_lowercase();
    if ["small", "startup", "smb"].iter().any(|w| lower.contains(w)) {
        return "Small".to_string();
    }
    if ["enterprise", "large", "global"].iter().any(|w| lower.contains(w)) {
        return "Enterprise".to_string();
    }
    "Medium".to_string()
}

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
    "Government",
    "Services",
];

fn detect_industry(input: &str) -> String {
    let lower = input.to_lowercase();
    INDUSTRIES
        .iter()
        .find(|industry| lower.contains(&industry.to_lowercase()))
        .map(|s| s.to_string())
        .unwrap_or_else(|| "General".to_string())
}

const CHALLENGE_KEYWORDS: &[&str] = &[
    "efficiency",
    "costs",
    "customer experience",
    "competition",
    "automation",
    "data",
    "innovation",
    "transformation",
];

fn extract_challenges(input: &str) -> Vec<String> {
    let lower = input.to_lowercase();
    let found: Vec<String> = CHALLENGE_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|s| s.to_string())
        .collect();
    if found.is_empty() {
        vec!["achieving AI transformation".to_string()]
    } else {
        found
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    fn answer_for(question: &Question) -> &'static str {
        match question.kind {
            QuestionKind::Scale => "7",
            QuestionKind::YesNo => "yes",
            QuestionKind::MultipleChoice => question.options[question.options.len() - 1],
            QuestionKind::Text => "we have a few initiatives underway",
        }
    }

    #[test]
    fn full_walk_reaches_completed_with_all_answers() {
        let mut driver = FlowDriver::new("org-test");
        let mut states = vec![driver.state()];

        let reply = driver.advance("hello");
        states.push(reply.state);
        let reply = driver.advance("Jane");
        states.push(reply.state);
        assert!(reply.message.contains("Jane"));
        let reply = driver.advance("Acme");
        states.push(reply.state);
        let reply = driver.advance("we need to reduce costs");
        states.push(reply.state);
        let mut reply = driver.advance("let's start");

        let mut action = None;
        while reply.state == FlowState::Assessment {
            let (_, question) = driver.current_question().unwrap();
            reply = driver.advance(answer_for(question));
            if let Some(a) = reply.action.take() {
                action = Some(a);
            }
        }
        states.push(reply.state);

        assert_eq!(
            states,
            vec![
                FlowState::Initial,
                FlowState::CollectingBasicInfo,
                FlowState::CollectingCompanyInfo,
                FlowState::CollectingChallenges,
                FlowState::Assessment,
                FlowState::PerformingAnalysis,
            ]
        );
        assert_eq!(driver.responses().len(), catalog::question_count());

        let Some(FlowAction::RunAnalysis(data)) = action else {
            panic!("expected RunAnalysis action");
        };
        assert_eq!(data.organization_id, "org-test");
        assert_eq!(data.responses.len(), 47);
        assert_eq!(data.context.current_challenges, vec!["costs".to_string()]);
    }

    #[test]
    fn progress_tracks_category_boundaries() {
        let mut driver = FlowDriver::new("org-progress");
        driver.advance("hi");
        driver.advance("Jane");
        driver.advance("Acme");
        driver.advance("efficiency");
        driver.advance("go");

        assert_eq!(driver.progress().current_category, 0);

        // Answer all 11 technical questions (5 dimensions).
        for _ in 0..11 {
            let (_, question) = driver.current_question().unwrap();
            driver.advance(answer_for(question));
        }
        let progress = driver.progress();
        assert_eq!(progress.current_category, 1);
        assert_eq!(progress.completed_dimensions, 5);

        let statuses = driver.category_statuses();
        assert!(statuses[0].completed);
        assert!(statuses[1].current);
        assert!(statuses[2].locked && statuses[3].locked);
    }

    #[test]
    fn unclear_yes_no_reprompts_without_advancing() {
        let mut driver = FlowDriver::new("org-unclear");
        driver.advance("hi");
        driver.advance("Jane");
        driver.advance("Acme");
        driver.advance("costs");
        driver.advance("go");

        // cloud_adoption, data_architecture, then api_integration (yes/no).
        driver.advance("Cloud-native");
        driver.advance("8");
        let (_, question) = driver.current_question().unwrap();
        assert_eq!(question.id, "api_integration");

        let before = driver.responses().len();
        let reply = driver.advance("it depends");
        assert_eq!(reply.state, FlowState::Assessment);
        assert_eq!(driver.responses().len(), before);
        let (_, still) = driver.current_question().unwrap();
        assert_eq!(still.id, "api_integration");

        driver.advance("absolutely");
        assert_eq!(
            driver.responses().get("api_integration"),
            Some(&Answer::YesNo(true))
        );
    }

    #[test]
    fn intake_heuristics() {
        assert_eq!(extract_name("Jane Smith"), "Jane");
        assert_eq!(extract_name("   "), "there");
        assert_eq!(detect_company_size("we're a small startup"), "Small");
        assert_eq!(detect_company_size("global enterprise"), "Enterprise");
        assert_eq!(detect_company_size("about 200 people"), "Medium");
        assert_eq!(detect_industry("we do healthcare analytics"), "Healthcare");
        assert_eq!(detect_industry("we make furniture"), "General");
        assert_eq!(
            extract_challenges("costs and automation mostly"),
            vec!["costs".to_string(), "automation".to_string()]
        );
        assert_eq!(
            extract_challenges("world domination"),
            vec!["achieving AI transformation".to_string()]
        );
    }

    #[test]
    fn fail_renders_fallback_and_completes() {
        let mut driver = FlowDriver::new("org-fail");
        let message = driver.fail();
        assert!(message.contains("follow up"));
        assert_eq!(driver.state(), FlowState::Completed);
    }

    #[test]
    fn maturity_context_bands() {
        assert!(maturity_context(1).contains("early stages"));
        assert!(maturity_context(4).contains("solid AI journey"));
        assert!(maturity_context(7).contains("AI leaders"));
        assert!(maturity_context(9).contains("forefront"));
    }
}
