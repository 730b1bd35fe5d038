//! Reserved words, per language revision.
//!
//! Every keyword records the revision that introduced it. A lookup under a
//! [`KeywordVersion`] only succeeds for keywords introduced at or before
//! that revision, so `logic` is an ordinary identifier under
//! `` `begin_keywords "1364-2005" ``.
//!
//! The table is generated by `keywords!` so that the enum, the spelling,
//! the introducing revision and the text lookup cannot drift apart.

use std::fmt;

/// Language revision selecting the set of reserved words.
///
/// Ordered: a later revision reserves every keyword of the earlier ones.
/// `V1364_2001NoConfig` is 1364-2001 without the library-map keywords
/// (`config`, `library`, ...), so it sorts just before `V1364_2001`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum KeywordVersion {
    V1364_1995,
    V1364_2001NoConfig,
    V1364_2001,
    V1364_2005,
    V1800_2005,
    V1800_2009,
    V1800_2012,
    V1800_2017,
}

impl KeywordVersion {
    /// The newest supported revision.
    pub const LATEST: KeywordVersion = KeywordVersion::V1800_2017;

    /// All revisions, oldest first.
    pub const ALL: &[KeywordVersion] = &[
        KeywordVersion::V1364_1995,
        KeywordVersion::V1364_2001NoConfig,
        KeywordVersion::V1364_2001,
        KeywordVersion::V1364_2005,
        KeywordVersion::V1800_2005,
        KeywordVersion::V1800_2009,
        KeywordVersion::V1800_2012,
        KeywordVersion::V1800_2017,
    ];

    /// Parse a `` `begin_keywords `` version specifier such as `1800-2017`.
    pub fn from_specifier(text: &str) -> Option<Self> {
        let version = match text {
            "1364-1995" => KeywordVersion::V1364_1995,
            "1364-2001-noconfig" => KeywordVersion::V1364_2001NoConfig,
            "1364-2001" => KeywordVersion::V1364_2001,
            "1364-2005" => KeywordVersion::V1364_2005,
            "1800-2005" => KeywordVersion::V1800_2005,
            "1800-2009" => KeywordVersion::V1800_2009,
            "1800-2012" => KeywordVersion::V1800_2012,
            "1800-2017" => KeywordVersion::V1800_2017,
            _ => return None,
        };
        Some(version)
    }

    /// The `` `begin_keywords `` specifier for this revision.
    pub fn specifier(self) -> &'static str {
        match self {
            KeywordVersion::V1364_1995 => "1364-1995",
            KeywordVersion::V1364_2001NoConfig => "1364-2001-noconfig",
            KeywordVersion::V1364_2001 => "1364-2001",
            KeywordVersion::V1364_2005 => "1364-2005",
            KeywordVersion::V1800_2005 => "1800-2005",
            KeywordVersion::V1800_2009 => "1800-2009",
            KeywordVersion::V1800_2012 => "1800-2012",
            KeywordVersion::V1800_2017 => "1800-2017",
        }
    }
}

impl fmt::Display for KeywordVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.specifier())
    }
}

macro_rules! keywords {
    ($( $version:ident { $( $variant:ident = $text:literal ),* $(,)? } )*) => {
        /// A reserved word of some language revision.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum Keyword {
            $( $( $variant, )* )*
        }

        impl Keyword {
            /// Every keyword, grouped by introducing revision.
            pub const ALL: &[Keyword] = &[$( $( Keyword::$variant, )* )*];

            /// The keyword's spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $( Keyword::$variant => $text, )* )*
                }
            }

            /// The revision that reserved this word.
            pub fn introduced(self) -> KeywordVersion {
                match self {
                    $( $( Keyword::$variant => KeywordVersion::$version, )* )*
                }
            }

            fn from_text(text: &str) -> Option<Keyword> {
                match text {
                    $( $( $text => Some(Keyword::$variant), )* )*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    V1364_1995 {
        Always = "always", And = "and", Assign = "assign", Begin = "begin",
        Buf = "buf", BufIf0 = "bufif0", BufIf1 = "bufif1", Case = "case",
        CaseX = "casex", CaseZ = "casez", Cmos = "cmos", Deassign = "deassign",
        Default = "default", Defparam = "defparam", Disable = "disable",
        Edge = "edge", Else = "else", End = "end", EndCase = "endcase",
        EndFunction = "endfunction", EndModule = "endmodule",
        EndPrimitive = "endprimitive", EndSpecify = "endspecify",
        EndTable = "endtable", EndTask = "endtask", Event = "event", For = "for",
        Force = "force", Forever = "forever", Fork = "fork",
        Function = "function", HighZ0 = "highz0", HighZ1 = "highz1", If = "if",
        IfNone = "ifnone", Initial = "initial", InOut = "inout", Input = "input",
        Integer = "integer", Join = "join", Large = "large",
        MacroModule = "macromodule", Medium = "medium", Module = "module",
        Nand = "nand", NegEdge = "negedge", Nmos = "nmos", Nor = "nor",
        Not = "not", NotIf0 = "notif0", NotIf1 = "notif1", Or = "or",
        Output = "output", Parameter = "parameter", Pmos = "pmos",
        PosEdge = "posedge", Primitive = "primitive", Pull0 = "pull0",
        Pull1 = "pull1", PullDown = "pulldown", PullUp = "pullup",
        Rcmos = "rcmos", Real = "real", RealTime = "realtime", Reg = "reg",
        Release = "release", Repeat = "repeat", Rnmos = "rnmos",
        Rpmos = "rpmos", Rtran = "rtran", RtranIf0 = "rtranif0",
        RtranIf1 = "rtranif1", Scalared = "scalared", Small = "small",
        Specify = "specify", Specparam = "specparam", Strong0 = "strong0",
        Strong1 = "strong1", Supply0 = "supply0", Supply1 = "supply1",
        Table = "table", Task = "task", Time = "time", Tran = "tran",
        TranIf0 = "tranif0", TranIf1 = "tranif1", Tri = "tri", Tri0 = "tri0",
        Tri1 = "tri1", TriAnd = "triand", TriOr = "trior", TriReg = "trireg",
        Vectored = "vectored", Wait = "wait", WAnd = "wand", Weak0 = "weak0",
        Weak1 = "weak1", While = "while", Wire = "wire", WOr = "wor",
        Xnor = "xnor", Xor = "xor",
    }
    V1364_2001NoConfig {
        Automatic = "automatic", EndGenerate = "endgenerate",
        Generate = "generate", Genvar = "genvar", LocalParam = "localparam",
        NoShowCancelled = "noshowcancelled",
        PulseStyleOnDetect = "pulsestyle_ondetect",
        PulseStyleOnEvent = "pulsestyle_onevent",
        ShowCancelled = "showcancelled", Signed = "signed",
        Unsigned = "unsigned",
    }
    V1364_2001 {
        Cell = "cell", Config = "config", Design = "design",
        EndConfig = "endconfig", IncDir = "incdir", Include = "include",
        Instance = "instance", LibList = "liblist", Library = "library",
        Use = "use",
    }
    V1364_2005 {
        UWire = "uwire",
    }
    V1800_2005 {
        UnitSystemName = "$unit", RootSystemName = "$root",
        Alias = "alias", AlwaysComb = "always_comb", AlwaysFF = "always_ff",
        AlwaysLatch = "always_latch", Assert = "assert", Assume = "assume",
        Before = "before", Bind = "bind", Bins = "bins", BinsOf = "binsof",
        Bit = "bit", Break = "break", Byte = "byte", CHandle = "chandle",
        Class = "class", Clocking = "clocking", Const = "const",
        Constraint = "constraint", Context = "context", Continue = "continue",
        Cover = "cover", CoverGroup = "covergroup", CoverPoint = "coverpoint",
        Cross = "cross", Dist = "dist", Do = "do", EndClass = "endclass",
        EndClocking = "endclocking", EndGroup = "endgroup",
        EndInterface = "endinterface", EndPackage = "endpackage",
        EndProgram = "endprogram", EndProperty = "endproperty",
        EndSequence = "endsequence", Enum = "enum", Expect = "expect",
        Export = "export", Extends = "extends", Extern = "extern",
        Final = "final", FirstMatch = "first_match", Foreach = "foreach",
        ForkJoin = "forkjoin", Iff = "iff", IgnoreBins = "ignore_bins",
        IllegalBins = "illegal_bins", Import = "import", Inside = "inside",
        Int = "int", Interface = "interface", Intersect = "intersect",
        JoinAny = "join_any", JoinNone = "join_none", Local = "local",
        Logic = "logic", LongInt = "longint", Matches = "matches",
        Modport = "modport", New = "new", Null = "null", Package = "package",
        Packed = "packed", Priority = "priority", Program = "program",
        Property = "property", Protected = "protected", Pure = "pure",
        Rand = "rand", RandC = "randc", RandCase = "randcase",
        RandSequence = "randsequence", Ref = "ref", Return = "return",
        Sequence = "sequence", ShortInt = "shortint", ShortReal = "shortreal",
        Solve = "solve", Static = "static", String = "string",
        Struct = "struct", Super = "super", Tagged = "tagged", This = "this",
        Throughout = "throughout", TimePrecision = "timeprecision",
        TimeUnit = "timeunit", Type = "type", Typedef = "typedef",
        Union = "union", Unique = "unique", Var = "var", Virtual = "virtual",
        Void = "void", WaitOrder = "wait_order", Wildcard = "wildcard",
        With = "with", Within = "within",
    }
    V1800_2009 {
        AcceptOn = "accept_on", Checker = "checker", EndChecker = "endchecker",
        Eventually = "eventually", Global = "global", Implies = "implies",
        Let = "let", NextTime = "nexttime", RejectOn = "reject_on",
        Restrict = "restrict", SAlways = "s_always",
        SEventually = "s_eventually", SNextTime = "s_nexttime",
        SUntil = "s_until", SUntilWith = "s_until_with", Strong = "strong",
        SyncAcceptOn = "sync_accept_on", SyncRejectOn = "sync_reject_on",
        Unique0 = "unique0", Until = "until", UntilWith = "until_with",
        Untyped = "untyped", Weak = "weak",
    }
    V1800_2012 {
        Implements = "implements", Interconnect = "interconnect",
        NetType = "nettype", Soft = "soft",
    }
}

impl Keyword {
    /// Look up `text` among the words reserved by `version`.
    ///
    /// Returns `None` for ordinary identifiers, including words that only a
    /// later revision reserves.
    #[inline]
    pub fn lookup(text: &str, version: KeywordVersion) -> Option<Keyword> {
        // Shortest keyword is 2 bytes ("do", "if", "or"), longest 19
        // ("pulsestyle_ondetect").
        if !(2..=19).contains(&text.len()) {
            return None;
        }
        Keyword::from_text(text).filter(|kw| kw.introduced() <= version)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
