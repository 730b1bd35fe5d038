//! Compiler directive names.
//!
//! A backtick followed by a name is a directive token. The lexer only
//! classifies the name; acting on it is the preprocessor's business.

/// Kind of a directive token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DirectiveKind {
    Define,
    Undef,
    UndefineAll,
    Include,
    IfDef,
    IfNDef,
    ElsIf,
    Else,
    EndIf,
    Timescale,
    DefaultNetType,
    ResetAll,
    Line,
    Pragma,
    BeginKeywords,
    EndKeywords,
    CellDefine,
    EndCellDefine,
    UnconnectedDrive,
    NoUnconnectedDrive,
    DefaultDecayTime,
    DefaultTriregStrength,
    DelayModeDistributed,
    DelayModePath,
    DelayModeUnit,
    DelayModeZero,
    /// `` `__FILE__ ``
    File,
    /// `` `__LINE__ ``
    LineNumber,
    /// Any other name: a use of a user-defined macro.
    MacroUsage,
}

impl DirectiveKind {
    /// Classify a directive name (the text after the backtick).
    pub fn from_name(name: &str) -> Self {
        match name {
            "define" => DirectiveKind::Define,
            "undef" => DirectiveKind::Undef,
            "undefineall" => DirectiveKind::UndefineAll,
            "include" => DirectiveKind::Include,
            "ifdef" => DirectiveKind::IfDef,
            "ifndef" => DirectiveKind::IfNDef,
            "elsif" => DirectiveKind::ElsIf,
            "else" => DirectiveKind::Else,
            "endif" => DirectiveKind::EndIf,
            "timescale" => DirectiveKind::Timescale,
            "default_nettype" => DirectiveKind::DefaultNetType,
            "resetall" => DirectiveKind::ResetAll,
            "line" => DirectiveKind::Line,
            "pragma" => DirectiveKind::Pragma,
            "begin_keywords" => DirectiveKind::BeginKeywords,
            "end_keywords" => DirectiveKind::EndKeywords,
            "celldefine" => DirectiveKind::CellDefine,
            "endcelldefine" => DirectiveKind::EndCellDefine,
            "unconnected_drive" => DirectiveKind::UnconnectedDrive,
            "nounconnected_drive" => DirectiveKind::NoUnconnectedDrive,
            "default_decay_time" => DirectiveKind::DefaultDecayTime,
            "default_trireg_strength" => DirectiveKind::DefaultTriregStrength,
            "delay_mode_distributed" => DirectiveKind::DelayModeDistributed,
            "delay_mode_path" => DirectiveKind::DelayModePath,
            "delay_mode_unit" => DirectiveKind::DelayModeUnit,
            "delay_mode_zero" => DirectiveKind::DelayModeZero,
            "__FILE__" => DirectiveKind::File,
            "__LINE__" => DirectiveKind::LineNumber,
            _ => DirectiveKind::MacroUsage,
        }
    }

    /// The directive's name, or `None` for macro usages.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            DirectiveKind::Define => "define",
            DirectiveKind::Undef => "undef",
            DirectiveKind::UndefineAll => "undefineall",
            DirectiveKind::Include => "include",
            DirectiveKind::IfDef => "ifdef",
            DirectiveKind::IfNDef => "ifndef",
            DirectiveKind::ElsIf => "elsif",
            DirectiveKind::Else => "else",
            DirectiveKind::EndIf => "endif",
            DirectiveKind::Timescale => "timescale",
            DirectiveKind::DefaultNetType => "default_nettype",
            DirectiveKind::ResetAll => "resetall",
            DirectiveKind::Line => "line",
            DirectiveKind::Pragma => "pragma",
            DirectiveKind::BeginKeywords => "begin_keywords",
            DirectiveKind::EndKeywords => "end_keywords",
            DirectiveKind::CellDefine => "celldefine",
            DirectiveKind::EndCellDefine => "endcelldefine",
            DirectiveKind::UnconnectedDrive => "unconnected_drive",
            DirectiveKind::NoUnconnectedDrive => "nounconnected_drive",
            DirectiveKind::DefaultDecayTime => "default_decay_time",
            DirectiveKind::DefaultTriregStrength => "default_trireg_strength",
            DirectiveKind::DelayModeDistributed => "delay_mode_distributed",
            DirectiveKind::DelayModePath => "delay_mode_path",
            DirectiveKind::DelayModeUnit => "delay_mode_unit",
            DirectiveKind::DelayModeZero => "delay_mode_zero",
            DirectiveKind::File => "__FILE__",
            DirectiveKind::LineNumber => "__LINE__",
            DirectiveKind::MacroUsage => return None,
        };
        Some(name)
    }

    /// Conditional-compilation directives.
    pub fn is_conditional(self) -> bool {
        matches!(
            self,
            DirectiveKind::IfDef
                | DirectiveKind::IfNDef
                | DirectiveKind::ElsIf
                | DirectiveKind::Else
                | DirectiveKind::EndIf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for name in ["define", "include", "ifdef", "begin_keywords", "__LINE__"] {
            let kind = DirectiveKind::from_name(name);
            assert_ne!(kind, DirectiveKind::MacroUsage, "{name}");
            assert_eq!(kind.name(), Some(name));
        }
    }

    #[test]
    fn unknown_names_are_macro_usages() {
        assert_eq!(DirectiveKind::from_name("WIDTH"), DirectiveKind::MacroUsage);
        assert_eq!(DirectiveKind::from_name("Define"), DirectiveKind::MacroUsage);
        assert_eq!(DirectiveKind::MacroUsage.name(), None);
    }

    #[test]
    fn conditionals() {
        assert!(DirectiveKind::ElsIf.is_conditional());
        assert!(!DirectiveKind::Define.is_conditional());
    }
}
