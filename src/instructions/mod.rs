//! # 6502 Instruction Implementations
//!
//! Implementations of all documented 6502 instructions, organized by
//! category. Each instruction is a standalone function taking the CPU and
//! its pre-resolved operand; PC has already been advanced past the whole
//! instruction by the time a handler runs.
//!
//! ## Categories
//!
//! - **alu**: arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: shifts and rotates (ASL, LSR, ROL, ROR)
//! - **load_store**: loads and stores (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: increments and decrements (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: control flow (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;

/// Dispatches a decoded instruction to its handler.
///
/// Every documented mnemonic in the opcode table has an arm here; reaching
/// the fallthrough means the table and this dispatcher disagree, which is a
/// bug in the crate rather than in the program being emulated.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    mnemonic: &str,
    operand: Operand,
) -> StepOutcome {
    match mnemonic {
        "ADC" => alu::adc(cpu, operand),
        "AND" => alu::and(cpu, operand),
        "ASL" => shifts::asl(cpu, operand),
        "BCC" => branches::bcc(cpu, operand),
        "BCS" => branches::bcs(cpu, operand),
        "BEQ" => branches::beq(cpu, operand),
        "BIT" => alu::bit(cpu, operand),
        "BMI" => branches::bmi(cpu, operand),
        "BNE" => branches::bne(cpu, operand),
        "BPL" => branches::bpl(cpu, operand),
        "BRK" => return control::brk(cpu),
        "BVC" => branches::bvc(cpu, operand),
        "BVS" => branches::bvs(cpu, operand),
        "CLC" => flags::clc(cpu),
        "CLD" => flags::cld(cpu),
        "CLI" => flags::cli(cpu),
        "CLV" => flags::clv(cpu),
        "CMP" => alu::cmp(cpu, operand),
        "CPX" => alu::cpx(cpu, operand),
        "CPY" => alu::cpy(cpu, operand),
        "DEC" => inc_dec::dec(cpu, operand),
        "DEX" => inc_dec::dex(cpu),
        "DEY" => inc_dec::dey(cpu),
        "EOR" => alu::eor(cpu, operand),
        "INC" => inc_dec::inc(cpu, operand),
        "INX" => inc_dec::inx(cpu),
        "INY" => inc_dec::iny(cpu),
        "JMP" => control::jmp(cpu, operand),
        "JSR" => control::jsr(cpu, operand),
        "LDA" => load_store::lda(cpu, operand),
        "LDX" => load_store::ldx(cpu, operand),
        "LDY" => load_store::ldy(cpu, operand),
        "LSR" => shifts::lsr(cpu, operand),
        "NOP" => {}
        "ORA" => alu::ora(cpu, operand),
        "PHA" => stack::pha(cpu),
        "PHP" => stack::php(cpu),
        "PLA" => stack::pla(cpu),
        "PLP" => stack::plp(cpu),
        "ROL" => shifts::rol(cpu, operand),
        "ROR" => shifts::ror(cpu, operand),
        "RTI" => control::rti(cpu),
        "RTS" => control::rts(cpu),
        "SBC" => alu::sbc(cpu, operand),
        "SEC" => flags::sec(cpu),
        "SED" => flags::sed(cpu),
        "SEI" => flags::sei(cpu),
        "STA" => load_store::sta(cpu, operand),
        "STX" => load_store::stx(cpu, operand),
        "STY" => load_store::sty(cpu, operand),
        "TAX" => transfer::tax(cpu),
        "TAY" => transfer::tay(cpu),
        "TSX" => transfer::tsx(cpu),
        "TXA" => transfer::txa(cpu),
        "TXS" => transfer::txs(cpu),
        "TYA" => transfer::tya(cpu),
        _ => unreachable!("opcode table mnemonic {} has no handler", mnemonic),
    }
    StepOutcome::Continuing
}
