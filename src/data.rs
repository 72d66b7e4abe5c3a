// Static chapter index for the Security Cube documentation

use crate::nav::{NavError, NavIndex, NavNode, Section};

/// Builds the full documentation index. Validated on construction so a bad
/// edit here fails at startup rather than rendering a broken sidebar.
pub fn chapter_index() -> Result<NavIndex, NavError> {
    NavIndex::new(vec![
        Section::new(
            "Get Started",
            "start",
            vec![
                NavNode::page("Introduction", "Introduction"),
                NavNode::page("Installation", "Installation"),
                NavNode::page("Quick Start", "QuickStart"),
            ],
        ),
        Section::new(
            "Language Models",
            "language-models",
            vec![
                NavNode::page("Overview", "framework-introduction"),
                NavNode::group(
                    "Quick Start",
                    "quick-start",
                    vec![
                        NavNode::page("Using a Pre-built Model", "using-prebuilt-models"),
                        NavNode::page("Customizing a New Model", "integrating-a-new-model"),
                    ],
                ),
            ],
        ),
        Section::new(
            "Attacker",
            "attacker",
            vec![
                NavNode::page("Attacker Introduction", "AttackIntroduction"),
                NavNode::group(
                    "Attack Methods",
                    "attack-methods",
                    vec![
                        NavNode::group(
                            "Logprobe based",
                            "logprobe",
                            vec![NavNode::page("LLM-Adaptive", "LLM-Adaptive")],
                        ),
                        NavNode::group(
                            "LLM based",
                            "llm",
                            vec![
                                NavNode::page("Pair", "Pair"),
                                NavNode::page("AutoDANTurbo", "AutoDANTurbo"),
                            ],
                        ),
                        NavNode::group(
                            "Multiround based",
                            "multiround",
                            vec![NavNode::page("ActorAttack", "ActorAttack")],
                        ),
                        NavNode::group(
                            "Strategy based",
                            "strategy",
                            vec![
                                NavNode::page("Pap", "Pap"),
                                NavNode::page("Codeattacker", "Codeattacker"),
                                NavNode::page("Renellm", "ReNeLLM"),
                            ],
                        ),
                        NavNode::group(
                            "Shuffle based",
                            "shuffle",
                            vec![
                                NavNode::page("Flip", "Flip"),
                                NavNode::page("BON (Best of N)", "Bon"),
                            ],
                        ),
                        NavNode::group(
                            "Flaw based",
                            "flaw",
                            vec![
                                NavNode::page("Multijail", "Multijail"),
                                NavNode::page("CipherChat", "CipherChat"),
                            ],
                        ),
                        NavNode::group(
                            "Template based",
                            "template",
                            vec![NavNode::page("GPTFuzz", "GPTFuzz")],
                        ),
                    ],
                ),
            ],
        ),
        Section::new(
            "Defender",
            "defender",
            vec![
                NavNode::page("Defender Introduction", "DefenderIntroduction"),
                NavNode::group(
                    "Defend Methods",
                    "defend-methods",
                    vec![
                        NavNode::group(
                            "Finetune based",
                            "finetune",
                            vec![NavNode::page("CircuitBreaker", "CircuitBreaker")],
                        ),
                        NavNode::group(
                            "Prefilter based",
                            "prefilter",
                            vec![
                                NavNode::page("PromptGuard", "PromptGuard"),
                                NavNode::page("Hidden State Guard", "Hidden_State_Guard"),
                            ],
                        ),
                        NavNode::group(
                            "System Prompt based",
                            "system-prompt",
                            vec![NavNode::page("SelfReminder", "SelfReminder")],
                        ),
                        NavNode::group(
                            "Postfilter based",
                            "postfilter",
                            vec![NavNode::page("Aligner", "Aligner")],
                        ),
                    ],
                ),
            ],
        ),
        Section::new(
            "Judger",
            "judger",
            vec![
                NavNode::page("The Role of the Judger", "TheRole"),
                NavNode::page("How Judgers Work", "HowItWorks"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chapter_index_is_valid() {
        let index = chapter_index().expect("static index must validate");
        let keys: Vec<&str> = index.sections().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            ["start", "language-models", "attacker", "defender", "judger"]
        );
    }
}
