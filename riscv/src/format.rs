//! # Operand Layouts
//!
//! Every RISC-V encoding format places its operands at fixed bit positions.
//! Immediates that the ISA scatters over the word are listed most significant
//! piece first, so extraction puts them back together in order:
//!
//! ```text
//! B-type   imm[12|10:5] rs2 rs1 funct3 imm[4:1|11] opcode
//!          31  30:25                   11:8 7
//!
//! imm = [31] [7] [30:25] [11:8]   (offset / 2, sign-extended)
//! ```
//!
//! Offsets whose low bits are always zero are extracted without them: B, J
//! and compressed branch offsets are in halfwords, compressed load/store
//! offsets in units of the access size, U-type immediates are the upper
//! 20 bits. Compressed `rd`/`rs1`/`rs2` fields of three bits name `x8..x15`.

use decoder::OperandField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Fully fixed encodings (`ECALL`, `C.NOP`).
    None,

    R,
    /// Register to register with `rs2` fixed, `fmv.x.w`, `fclass.s`.
    R2,
    /// Floating point with a rounding mode.
    RFp,
    /// Floating point, one source and a rounding mode.
    RFp1,
    /// Fused multiply-add.
    R4,
    I,
    IShamt5,
    IShamt6,
    S,
    B,
    U,
    J,
    Csr,
    CsrImm,
    Fence,
    Amo,
    /// `LR`, like [`Format::Amo`] but without `rs2`.
    Lr,
    SfenceVma,

    /// `C.MV`, `C.ADD`
    Cr,
    /// `C.JR`, `C.JALR`
    CrJump,
    /// `C.ADDI`, `C.LI`, `C.LUI`, `C.ADDIW`
    Ci,
    /// `C.SLLI`
    CiShamt,
    /// `C.ADDI16SP`
    CiSp,
    CLwsp,
    CLdsp,
    CSwsp,
    CSdsp,
    /// `C.ADDI4SPN`
    Ciw,
    CLw,
    CLd,
    CSw,
    CSd,
    /// `C.BEQZ`, `C.BNEZ`
    CbBranch,
    /// `C.SRLI`, `C.SRAI`
    CbShamt,
    /// `C.ANDI`
    CbImm,
    Ca,
    Cj,
}

fn rd() -> OperandField {
    OperandField::unsigned("rd", [(11, 7)])
}

fn rs1() -> OperandField {
    OperandField::unsigned("rs1", [(19, 15)])
}

fn rs2() -> OperandField {
    OperandField::unsigned("rs2", [(24, 20)])
}

fn rm() -> OperandField {
    OperandField::unsigned("rm", [(14, 12)])
}

fn aq_rl() -> [OperandField; 2] {
    [
        OperandField::unsigned("aq", [(26, 26)]),
        OperandField::unsigned("rl", [(25, 25)]),
    ]
}

impl Format {
    pub fn fields(self) -> Vec<OperandField> {
        match self {
            Self::None => vec![],
            Self::R => vec![rd(), rs1(), rs2()],
            Self::R2 => vec![rd(), rs1()],
            Self::RFp => vec![rd(), rs1(), rs2(), rm()],
            Self::RFp1 => vec![rd(), rs1(), rm()],
            Self::R4 => vec![
                rd(),
                rs1(),
                rs2(),
                OperandField::unsigned("rs3", [(31, 27)]),
                rm(),
            ],
            Self::I => vec![rd(), rs1(), OperandField::signed("imm", [(31, 20)])],
            Self::IShamt5 => vec![rd(), rs1(), OperandField::unsigned("shamt", [(24, 20)])],
            Self::IShamt6 => vec![rd(), rs1(), OperandField::unsigned("shamt", [(25, 20)])],
            Self::S => vec![rs1(), rs2(), OperandField::signed("imm", [(31, 25), (11, 7)])],
            Self::B => vec![
                rs1(),
                rs2(),
                OperandField::signed("imm", [(31, 31), (7, 7), (30, 25), (11, 8)]),
            ],
            Self::U => vec![rd(), OperandField::unsigned("imm", [(31, 12)])],
            Self::J => vec![
                rd(),
                OperandField::signed("imm", [(31, 31), (19, 12), (20, 20), (30, 21)]),
            ],
            Self::Csr => vec![rd(), rs1(), OperandField::unsigned("csr", [(31, 20)])],
            Self::CsrImm => vec![
                rd(),
                OperandField::unsigned("uimm", [(19, 15)]),
                OperandField::unsigned("csr", [(31, 20)]),
            ],
            Self::Fence => vec![
                OperandField::unsigned("fm", [(31, 28)]),
                OperandField::unsigned("pred", [(27, 24)]),
                OperandField::unsigned("succ", [(23, 20)]),
                rs1(),
                rd(),
            ],
            Self::Amo => {
                let [aq, rl] = aq_rl();
                vec![rd(), rs1(), rs2(), aq, rl]
            }
            Self::Lr => {
                let [aq, rl] = aq_rl();
                vec![rd(), rs1(), aq, rl]
            }
            Self::SfenceVma => vec![rs1(), rs2()],

            Self::Cr => vec![rd(), OperandField::unsigned("rs2", [(6, 2)])],
            Self::CrJump => vec![OperandField::unsigned("rs1", [(11, 7)])],
            Self::Ci => vec![rd(), OperandField::signed("imm", [(12, 12), (6, 2)])],
            Self::CiShamt => vec![rd(), OperandField::unsigned("shamt", [(12, 12), (6, 2)])],
            Self::CiSp => vec![OperandField::signed(
                "imm",
                [(12, 12), (4, 3), (5, 5), (2, 2), (6, 6)],
            )],
            Self::CLwsp => vec![rd(), OperandField::unsigned("offset", [(3, 2), (12, 12), (6, 4)])],
            Self::CLdsp => vec![rd(), OperandField::unsigned("offset", [(4, 2), (12, 12), (6, 5)])],
            Self::CSwsp => vec![
                OperandField::unsigned("rs2", [(6, 2)]),
                OperandField::unsigned("offset", [(8, 7), (12, 9)]),
            ],
            Self::CSdsp => vec![
                OperandField::unsigned("rs2", [(6, 2)]),
                OperandField::unsigned("offset", [(9, 7), (12, 10)]),
            ],
            Self::Ciw => vec![
                OperandField::unsigned("rd", [(4, 2)]),
                OperandField::unsigned("imm", [(10, 7), (12, 11), (5, 5), (6, 6)]),
            ],
            Self::CLw => vec![
                OperandField::unsigned("rd", [(4, 2)]),
                OperandField::unsigned("rs1", [(9, 7)]),
                OperandField::unsigned("offset", [(5, 5), (12, 10), (6, 6)]),
            ],
            Self::CLd => vec![
                OperandField::unsigned("rd", [(4, 2)]),
                OperandField::unsigned("rs1", [(9, 7)]),
                OperandField::unsigned("offset", [(6, 5), (12, 10)]),
            ],
            Self::CSw => vec![
                OperandField::unsigned("rs1", [(9, 7)]),
                OperandField::unsigned("rs2", [(4, 2)]),
                OperandField::unsigned("offset", [(5, 5), (12, 10), (6, 6)]),
            ],
            Self::CSd => vec![
                OperandField::unsigned("rs1", [(9, 7)]),
                OperandField::unsigned("rs2", [(4, 2)]),
                OperandField::unsigned("offset", [(6, 5), (12, 10)]),
            ],
            Self::CbBranch => vec![
                OperandField::unsigned("rs1", [(9, 7)]),
                OperandField::signed("offset", [(12, 12), (6, 5), (2, 2), (11, 10), (4, 3)]),
            ],
            Self::CbShamt => vec![
                OperandField::unsigned("rd", [(9, 7)]),
                OperandField::unsigned("shamt", [(12, 12), (6, 2)]),
            ],
            Self::CbImm => vec![
                OperandField::unsigned("rd", [(9, 7)]),
                OperandField::signed("imm", [(12, 12), (6, 2)]),
            ],
            Self::Ca => vec![
                OperandField::unsigned("rd", [(9, 7)]),
                OperandField::unsigned("rs2", [(4, 2)]),
            ],
            Self::Cj => vec![OperandField::signed(
                "offset",
                [(12, 12), (8, 8), (10, 9), (6, 6), (7, 7), (2, 2), (11, 11), (5, 3)],
            )],
        }
    }
}
