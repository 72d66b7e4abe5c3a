// Embedded documentation pages
//
// Every page the site ships is compiled in from docs/. Index entries without
// a payload here (work-in-progress chapters) resolve to NotFound, which the
// content pane renders as a visible placeholder.

use super::registry::ContentRegistry;

/// Builds the registry of all shipped documentation pages.
pub fn builtin_registry() -> ContentRegistry {
    let mut registry = ContentRegistry::new();

    registry.register(
        "start",
        "Introduction",
        include_str!("../../docs/start/Introduction.md"),
    );
    registry.register(
        "start",
        "Installation",
        include_str!("../../docs/start/Installation.md"),
    );

    registry.register(
        "language-models",
        "framework-introduction",
        include_str!("../../docs/language-models/framework-introduction.md"),
    );
    registry.register(
        "language-models",
        "using-prebuilt-models",
        include_str!("../../docs/language-models/using-prebuilt-models.md"),
    );
    registry.register(
        "language-models",
        "integrating-a-new-model",
        include_str!("../../docs/language-models/integrating-a-new-model.md"),
    );

    registry.register(
        "attacker",
        "Overview",
        include_str!("../../docs/attacker/Overview.md"),
    );
    registry.register(
        "attacker",
        "AttackIntroduction",
        include_str!("../../docs/attacker/AttackIntroduction.md"),
    );
    registry.register(
        "attacker",
        "Pair",
        include_str!("../../docs/attacker/Pair.md"),
    );
    registry.register(
        "attacker",
        "AutoDANTurbo",
        include_str!("../../docs/attacker/AutoDANTurbo.md"),
    );
    registry.register(
        "attacker",
        "ActorAttack",
        include_str!("../../docs/attacker/ActorAttack.md"),
    );
    registry.register("attacker", "Pap", include_str!("../../docs/attacker/Pap.md"));

    registry.register(
        "defender",
        "DefenderIntroduction",
        include_str!("../../docs/defender/DefenderIntroduction.md"),
    );
    registry.register(
        "defender",
        "Aligner",
        include_str!("../../docs/defender/Aligner.md"),
    );
    registry.register(
        "defender",
        "PromptGuard",
        include_str!("../../docs/defender/PromptGuard.md"),
    );
    registry.register(
        "defender",
        "SelfReminder",
        include_str!("../../docs/defender/SelfReminder.md"),
    );
    registry.register(
        "defender",
        "Hidden_State_Guard",
        include_str!("../../docs/defender/Hidden_State_Guard.md"),
    );

    registry
}
