//! The `Operator` enum: one variant per MIXAL mnemonic, and the bidirectional
//! mapping to/from a decoded `(opcode byte, field byte)` pair.
//!
//! MIX packs many logically distinct operations behind a single opcode byte,
//! distinguished only by the field (`F`) byte — `SH` alone becomes six
//! different shifts. `Operator` undoes that packing: each mnemonic the
//! assembler or a disassembler cares about gets its own variant, and
//! [`Operator::to_code_and_field`]/[`Operator::from_code_and_field`] are
//! exact inverses of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Nop,
    Add,
    Sub,
    Mul,
    Div,
    /// Convert `(rA, rX)` to a decimal-digit byte string.
    Num,
    /// Convert a decimal-digit byte string to `(rA, rX)`.
    Char,
    Hlt,
    Sla,
    Sra,
    Slax,
    Srax,
    Slc,
    Src,
    Move,
    Lda,
    Ld1,
    Ld2,
    Ld3,
    Ld4,
    Ld5,
    Ld6,
    Ldx,
    Ldan,
    Ld1n,
    Ld2n,
    Ld3n,
    Ld4n,
    Ld5n,
    Ld6n,
    Ldxn,
    Sta,
    St1,
    St2,
    St3,
    St4,
    St5,
    St6,
    Stx,
    Stj,
    Stz,
    Jbus,
    Ioc,
    In,
    Out,
    Jred,
    Jmp,
    Jsj,
    Jov,
    Jnov,
    Jl,
    Je,
    Jg,
    Jge,
    Jne,
    Jle,
    Jan,
    Jaz,
    Jap,
    Jann,
    Janz,
    Janp,
    J1n,
    J1z,
    J1p,
    J1nn,
    J1nz,
    J1np,
    J2n,
    J2z,
    J2p,
    J2nn,
    J2nz,
    J2np,
    J3n,
    J3z,
    J3p,
    J3nn,
    J3nz,
    J3np,
    J4n,
    J4z,
    J4p,
    J4nn,
    J4nz,
    J4np,
    J5n,
    J5z,
    J5p,
    J5nn,
    J5nz,
    J5np,
    J6n,
    J6z,
    J6p,
    J6nn,
    J6nz,
    J6np,
    Jxn,
    Jxz,
    Jxp,
    Jxnn,
    Jxnz,
    Jxnp,
    Inca,
    Deca,
    Enta,
    Enna,
    Inc1,
    Dec1,
    Ent1,
    Enn1,
    Inc2,
    Dec2,
    Ent2,
    Enn2,
    Inc3,
    Dec3,
    Ent3,
    Enn3,
    Inc4,
    Dec4,
    Ent4,
    Enn4,
    Inc5,
    Dec5,
    Ent5,
    Enn5,
    Inc6,
    Dec6,
    Ent6,
    Enn6,
    Incx,
    Decx,
    Entx,
    Ennx,
    Cmpa,
    Cmp1,
    Cmp2,
    Cmp3,
    Cmp4,
    Cmp5,
    Cmp6,
    Cmpx,
}

use Operator::*;

/// Every operator, in mnemonic-table order. Used to build the assembler's
/// mnemonic lookup and to drive the opcode round-trip property test.
pub const ALL: [Operator; 144] = [
    Nop, Add, Sub, Mul, Div, Num, Char, Hlt, Sla, Sra, Slax, Srax, Slc, Src, Move, Lda, Ld1, Ld2,
    Ld3, Ld4, Ld5, Ld6, Ldx, Ldan, Ld1n, Ld2n, Ld3n, Ld4n, Ld5n, Ld6n, Ldxn, Sta, St1, St2, St3,
    St4, St5, St6, Stx, Stj, Stz, Jbus, Ioc, In, Out, Jred, Jmp, Jsj, Jov, Jnov, Jl, Je, Jg, Jge,
    Jne, Jle, Jan, Jaz, Jap, Jann, Janz, Janp, J1n, J1z, J1p, J1nn, J1nz, J1np, J2n, J2z, J2p,
    J2nn, J2nz, J2np, J3n, J3z, J3p, J3nn, J3nz, J3np, J4n, J4z, J4p, J4nn, J4nz, J4np, J5n, J5z,
    J5p, J5nn, J5nz, J5np, J6n, J6z, J6p, J6nn, J6nz, J6np, Jxn, Jxz, Jxp, Jxnn, Jxnz, Jxnp, Inca,
    Deca, Enta, Enna, Inc1, Dec1, Ent1, Enn1, Inc2, Dec2, Ent2, Enn2, Inc3, Dec3, Ent3, Enn3,
    Inc4, Dec4, Ent4, Enn4, Inc5, Dec5, Ent5, Enn5, Inc6, Dec6, Ent6, Enn6, Incx, Decx, Entx,
    Ennx, Cmpa, Cmp1, Cmp2, Cmp3, Cmp4, Cmp5, Cmp6, Cmpx,
];

impl Operator {
    /// Its MIXAL mnemonic, as it would appear in source.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Nop => "NOP", Add => "ADD", Sub => "SUB", Mul => "MUL", Div => "DIV",
            Num => "NUM", Char => "CHAR", Hlt => "HLT",
            Sla => "SLA", Sra => "SRA", Slax => "SLAX", Srax => "SRAX", Slc => "SLC", Src => "SRC",
            Move => "MOVE",
            Lda => "LDA", Ld1 => "LD1", Ld2 => "LD2", Ld3 => "LD3", Ld4 => "LD4", Ld5 => "LD5",
            Ld6 => "LD6", Ldx => "LDX",
            Ldan => "LDAN", Ld1n => "LD1N", Ld2n => "LD2N", Ld3n => "LD3N", Ld4n => "LD4N",
            Ld5n => "LD5N", Ld6n => "LD6N", Ldxn => "LDXN",
            Sta => "STA", St1 => "ST1", St2 => "ST2", St3 => "ST3", St4 => "ST4", St5 => "ST5",
            St6 => "ST6", Stx => "STX", Stj => "STJ", Stz => "STZ",
            Jbus => "JBUS", Ioc => "IOC", In => "IN", Out => "OUT", Jred => "JRED",
            Jmp => "JMP", Jsj => "JSJ", Jov => "JOV", Jnov => "JNOV", Jl => "JL", Je => "JE",
            Jg => "JG", Jge => "JGE", Jne => "JNE", Jle => "JLE",
            Jan => "JAN", Jaz => "JAZ", Jap => "JAP", Jann => "JANN", Janz => "JANZ", Janp => "JANP",
            J1n => "J1N", J1z => "J1Z", J1p => "J1P", J1nn => "J1NN", J1nz => "J1NZ", J1np => "J1NP",
            J2n => "J2N", J2z => "J2Z", J2p => "J2P", J2nn => "J2NN", J2nz => "J2NZ", J2np => "J2NP",
            J3n => "J3N", J3z => "J3Z", J3p => "J3P", J3nn => "J3NN", J3nz => "J3NZ", J3np => "J3NP",
            J4n => "J4N", J4z => "J4Z", J4p => "J4P", J4nn => "J4NN", J4nz => "J4NZ", J4np => "J4NP",
            J5n => "J5N", J5z => "J5Z", J5p => "J5P", J5nn => "J5NN", J5nz => "J5NZ", J5np => "J5NP",
            J6n => "J6N", J6z => "J6Z", J6p => "J6P", J6nn => "J6NN", J6nz => "J6NZ", J6np => "J6NP",
            Jxn => "JXN", Jxz => "JXZ", Jxp => "JXP", Jxnn => "JXNN", Jxnz => "JXNZ", Jxnp => "JXNP",
            Inca => "INCA", Deca => "DECA", Enta => "ENTA", Enna => "ENNA",
            Inc1 => "INC1", Dec1 => "DEC1", Ent1 => "ENT1", Enn1 => "ENN1",
            Inc2 => "INC2", Dec2 => "DEC2", Ent2 => "ENT2", Enn2 => "ENN2",
            Inc3 => "INC3", Dec3 => "DEC3", Ent3 => "ENT3", Enn3 => "ENN3",
            Inc4 => "INC4", Dec4 => "DEC4", Ent4 => "ENT4", Enn4 => "ENN4",
            Inc5 => "INC5", Dec5 => "DEC5", Ent5 => "ENT5", Enn5 => "ENN5",
            Inc6 => "INC6", Dec6 => "DEC6", Ent6 => "ENT6", Enn6 => "ENN6",
            Incx => "INCX", Decx => "DECX", Entx => "ENTX", Ennx => "ENNX",
            Cmpa => "CMPA", Cmp1 => "CMP1", Cmp2 => "CMP2", Cmp3 => "CMP3", Cmp4 => "CMP4",
            Cmp5 => "CMP5", Cmp6 => "CMP6", Cmpx => "CMPX",
        }
    }

    /// The operator's opcode byte and default field byte, i.e. what a
    /// MIXAL line with no explicit `(F)` part assembles to.
    pub const fn to_code_and_field(self) -> (u8, u8) {
        match self {
            Nop => (0, 0),
            Add => (1, 5), Sub => (2, 5), Mul => (3, 5), Div => (4, 5),
            Num => (5, 0), Char => (5, 1), Hlt => (5, 2),
            Sla => (6, 0), Sra => (6, 1), Slax => (6, 2), Srax => (6, 3), Slc => (6, 4), Src => (6, 5),
            Move => (7, 1),
            Lda => (8, 5), Ld1 => (9, 5), Ld2 => (10, 5), Ld3 => (11, 5), Ld4 => (12, 5),
            Ld5 => (13, 5), Ld6 => (14, 5), Ldx => (15, 5),
            Ldan => (16, 5), Ld1n => (17, 5), Ld2n => (18, 5), Ld3n => (19, 5), Ld4n => (20, 5),
            Ld5n => (21, 5), Ld6n => (22, 5), Ldxn => (23, 5),
            Sta => (24, 5), St1 => (25, 5), St2 => (26, 5), St3 => (27, 5), St4 => (28, 5),
            St5 => (29, 5), St6 => (30, 5), Stx => (31, 5), Stj => (32, 2), Stz => (33, 5),
            Jbus => (34, 0), Ioc => (35, 0), In => (36, 0), Out => (37, 0), Jred => (38, 0),
            Jmp => (39, 0), Jsj => (39, 1), Jov => (39, 2), Jnov => (39, 3), Jl => (39, 4),
            Je => (39, 5), Jg => (39, 6), Jge => (39, 7), Jne => (39, 8), Jle => (39, 9),
            Jan => (40, 0), Jaz => (40, 1), Jap => (40, 2), Jann => (40, 3), Janz => (40, 4), Janp => (40, 5),
            J1n => (41, 0), J1z => (41, 1), J1p => (41, 2), J1nn => (41, 3), J1nz => (41, 4), J1np => (41, 5),
            J2n => (42, 0), J2z => (42, 1), J2p => (42, 2), J2nn => (42, 3), J2nz => (42, 4), J2np => (42, 5),
            J3n => (43, 0), J3z => (43, 1), J3p => (43, 2), J3nn => (43, 3), J3nz => (43, 4), J3np => (43, 5),
            J4n => (44, 0), J4z => (44, 1), J4p => (44, 2), J4nn => (44, 3), J4nz => (44, 4), J4np => (44, 5),
            J5n => (45, 0), J5z => (45, 1), J5p => (45, 2), J5nn => (45, 3), J5nz => (45, 4), J5np => (45, 5),
            J6n => (46, 0), J6z => (46, 1), J6p => (46, 2), J6nn => (46, 3), J6nz => (46, 4), J6np => (46, 5),
            Jxn => (47, 0), Jxz => (47, 1), Jxp => (47, 2), Jxnn => (47, 3), Jxnz => (47, 4), Jxnp => (47, 5),
            Inca => (48, 0), Deca => (48, 1), Enta => (48, 2), Enna => (48, 3),
            Inc1 => (49, 0), Dec1 => (49, 1), Ent1 => (49, 2), Enn1 => (49, 3),
            Inc2 => (50, 0), Dec2 => (50, 1), Ent2 => (50, 2), Enn2 => (50, 3),
            Inc3 => (51, 0), Dec3 => (51, 1), Ent3 => (51, 2), Enn3 => (51, 3),
            Inc4 => (52, 0), Dec4 => (52, 1), Ent4 => (52, 2), Enn4 => (52, 3),
            Inc5 => (53, 0), Dec5 => (53, 1), Ent5 => (53, 2), Enn5 => (53, 3),
            Inc6 => (54, 0), Dec6 => (54, 1), Ent6 => (54, 2), Enn6 => (54, 3),
            Incx => (55, 0), Decx => (55, 1), Entx => (55, 2), Ennx => (55, 3),
            Cmpa => (56, 5), Cmp1 => (57, 5), Cmp2 => (58, 5), Cmp3 => (59, 5), Cmp4 => (60, 5),
            Cmp5 => (61, 5), Cmp6 => (62, 5), Cmpx => (63, 5),
        }
    }

    /// Inverse of [`Operator::to_code_and_field`], but **by code first**:
    /// most opcodes name a single operator, for which `field` is a plain
    /// instance value (an `(L:R)` selector, a device number, a shift or
    /// move count) rather than part of identifying the operator, so any
    /// field value resolves to that operator. Only the opcodes that really
    /// do pack several operators behind one code — `SH`, `NUM`/`CHAR`/`HLT`,
    /// `JMP`'s family, the register jumps, and address-transfer — dispatch
    /// on `field`, matching one of their default fields exactly. Returns
    /// `None` only when `code` names no operator at all, or names a variant
    /// family and `field` matches none of its variants (the caller turns
    /// this into `RuntimeError::UndefinedInstruction`).
    pub fn from_code_and_field(code: u8, field: u8) -> Option<Operator> {
        let mut candidates = ALL.iter().copied().filter(|op| op.to_code_and_field().0 == code);
        let first = candidates.next()?;
        if candidates.next().is_none() {
            return Some(first);
        }
        ALL.iter().copied().find(|op| op.to_code_and_field() == (code, field))
    }

    /// Looks up an operator by its MIXAL mnemonic (case-sensitive, as MIXAL
    /// mnemonics are conventionally upper case).
    pub fn from_mnemonic(mnemonic: &str) -> Option<Operator> {
        ALL.iter().copied().find(|op| op.mnemonic() == mnemonic)
    }
}
