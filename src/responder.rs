//! Deterministic stand-in for the "AI assistant": an ordered rule table of
//! keyword sets mapped to fixed reply templates. No inference, no randomness,
//! no external calls.

pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// First matching rule wins; matching is case-insensitive substring
/// containment on the raw input.
pub const RULES: [ResponseRule; 2] = [
    ResponseRule {
        keywords: &["optimize", "schedule"],
        reply: SCHEDULE_OPTIMIZATION,
    },
    ResponseRule {
        keywords: &["delay", "analyze"],
        reply: DELAY_ANALYSIS,
    },
];

pub const SCHEDULE_OPTIMIZATION: &str = "\
Based on my analysis of current railway operations:

Schedule Optimization Recommendations:

1. Peak Hours Adjustment: increase frequency on Lines 1, 3 and 5 between 7:00-9:00 AM
2. Platform Utilization: Platform 4 is underutilized - suggest rerouting 3 services
3. Connection Optimization: reduce transfer time at Central Hub by 2 minutes

Expected Impact:
- 15% reduction in average passenger wait time
- 8% increase in network capacity
- EUR 45,000 monthly operational savings

Would you like me to generate a detailed implementation plan?";

pub const DELAY_ANALYSIS: &str = "\
Delay Analysis Results:

Key Findings:
- 73% of delays occur during morning rush (6:00-9:00 AM)
- Primary cause: signal failures at junction points (42%)
- Secondary cause: platform congestion (31%)

Trending Patterns:
- Tuesday and Thursday show 23% more delays
- Weather-related delays increased by 15% this month

Recommended Actions:
1. Upgrade signaling system at Junction A and C
2. Implement dynamic platform assignment
3. Add buffer time for weather-sensitive routes

Shall I create a detailed report with visualizations?";

pub const CAPABILITIES: &str = "\
I understand your query. Let me analyze the relevant railway data for you.

Based on our comprehensive database of national timetables, network topology,
historical performance data and regulatory requirements, I can help you with:

- Schedule optimization
- Capacity planning
- Delay analysis and predictions
- Maintenance scheduling
- Regulatory compliance checks
- Route planning and optimization

Please provide more specific details about what you'd like to analyze or optimize.";

pub struct QuickPrompt {
    pub label: &'static str,
    pub message: &'static str,
}

pub const QUICK_PROMPTS: [QuickPrompt; 3] = [
    QuickPrompt {
        label: "Optimize morning schedule",
        message: "Optimize the morning schedule for maximum efficiency",
    },
    QuickPrompt {
        label: "Analyze last week's delays",
        message: "Analyze all delays from last week and identify patterns",
    },
    QuickPrompt {
        label: "Maintenance planning",
        message: "Create optimal maintenance schedule for next month",
    },
];

/// Total over all inputs: falls back to the capability listing when no rule
/// matches.
pub fn reply_to(text: &str) -> &'static str {
    let lowered = text.to_ascii_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|rule| rule.reply)
        .unwrap_or(CAPABILITIES)
}

#[cfg(test)]
mod tests {
    use super::{reply_to, CAPABILITIES, DELAY_ANALYSIS, SCHEDULE_OPTIMIZATION};

    #[test]
    fn schedule_keywords_select_optimization_template() {
        assert_eq!(
            reply_to("Please optimize the morning schedule"),
            SCHEDULE_OPTIMIZATION
        );
        assert_eq!(reply_to("new SCHEDULE please"), SCHEDULE_OPTIMIZATION);
    }

    #[test]
    fn delay_keywords_select_analysis_template() {
        assert_eq!(reply_to("Analyze last week's delays"), DELAY_ANALYSIS);
        assert_eq!(reply_to("why the DELAY on line 3?"), DELAY_ANALYSIS);
    }

    #[test]
    fn first_rule_wins_when_both_keyword_sets_match() {
        assert_eq!(reply_to("schedule and delay"), SCHEDULE_OPTIMIZATION);
    }

    #[test]
    fn unmatched_input_falls_back_to_capability_listing() {
        assert_eq!(reply_to("Hello there"), CAPABILITIES);
        assert_eq!(reply_to(""), CAPABILITIES);
    }

    #[test]
    fn replies_are_stable_across_repeated_calls() {
        let first = reply_to("optimize everything");
        let second = reply_to("optimize everything");
        assert_eq!(first, second);
    }
}
