//! Literal content: screen blocks, boot chatter and the farewell.
//!
//! Everything here is fixed at compile time. Each block is a slice of
//! `(kind, text)` pairs so the styling hint travels with the line.

use crate::model::LineKind::{self, Emphasis, Error, Header, Plain, Success, System};

pub type StaticBlock = &'static [(LineKind, &'static str)];

/// One timed line of the boot sequence, as written in the source table.
pub type StaticBootLine = (LineKind, u64, &'static str);

pub const BOOT_LINES: &[StaticBootLine] = &[
    (System, 300, "META-LANDING BIOS v2.6.0 (c) 2026 agidreams"),
    (System, 250, "Initializing why-first kernel..."),
    (Success, 200, "Loading philosophy module ............ [ OK ]"),
    (Success, 200, "Mounting /dev/why ..................... [ OK ]"),
    (System, 180, "> Spawning agent-01: Design Trends Research"),
    (System, 180, "> Spawning agent-02: Tech Stack Analysis"),
    (System, 180, "> Spawning agent-03: Workflow Examples"),
    (System, 220, "[Interview Mode] 6 questions answered"),
    (Success, 220, "Chesterton's fence check .............. [ PASS ]"),
    (Emphasis, 250, "Shortcuts taken ....................... 0"),
    (Success, 300, "System ready."),
];

/// Appended after the banner once the boot lines have played.
pub const USAGE_HINT: StaticBlock = &[
    (Plain, ""),
    (System, "Type 'menu' to begin, or 'help' for all commands."),
];

pub const BANNER: StaticBlock = &[
    (Plain, ""),
    (Header, "  ╔═╗╔╦╗╔═╗╦═╗╔╦╗  ╦ ╦╦╔╦╗╦ ╦  ╦ ╦╦ ╦╦ ╦"),
    (Header, "  ╚═╗ ║ ╠═╣╠╦╝ ║   ║║║║ ║ ╠═╣  ║║║╠═╣╚╦╝"),
    (Header, "  ╚═╝ ╩ ╩ ╩╩╚═ ╩   ╚╩╝╩ ╩ ╩ ╩  ╚╩╝╩ ╩ ╩ "),
    (Plain, ""),
    (Emphasis, "  Not another AI workflow page. This IS the workflow, running live."),
    (System, "  Live Demo: Meta Landing Page Hackathon"),
];

pub const MENU: StaticBlock = &[
    (Header, "MAIN MENU"),
    (Plain, ""),
    (Plain, "  [1] why        The philosophy"),
    (Plain, "  [2] stack      Tools that play together"),
    (Plain, "  [3] workflow   Five steps. No magic."),
    (Plain, "  [4] proof      This page is the proof"),
    (Plain, "  [5] contact    Reach the sysop"),
    (Plain, ""),
    (System, "Type a number or a name. 'help' lists everything."),
];

pub const HELP: StaticBlock = &[
    (Header, "AVAILABLE COMMANDS"),
    (Plain, ""),
    (Plain, "  menu, m                 Show the main menu"),
    (Plain, "  1, why, philosophy      Start with why"),
    (Plain, "  2, stack, tools         The stack"),
    (Plain, "  3, workflow, flow       The workflow"),
    (Plain, "  4, proof, meta          The proof"),
    (Plain, "  5, contact, sysop       Contact"),
    (Plain, "  about                   About this terminal"),
    (Plain, "  banner, home            Back to the title screen"),
    (Plain, "  clear, cls              Clear the screen"),
    (Plain, "  ls whoami pwd date uname"),
    (Plain, "                          The usual suspects"),
    (Plain, "  exit, quit, logout      Leave (sort of)"),
    (Plain, ""),
    (System, "Up/Down recall previous commands."),
];

pub const PHILOSOPHY: StaticBlock = &[
    (Header, "01 / THE PHILOSOPHY"),
    (Plain, ""),
    (Emphasis, "  \"What job is this page hiring to do for the visitor?\""),
    (Plain, ""),
    (Plain, "  Before I write a single line of code, I ask this question."),
    (Plain, "  The more clarity on WHY, the better you deliver the WHAT."),
    (Plain, ""),
    (Emphasis, "  01  Clear Goals First"),
    (Plain, "      What is the visitor intended to learn? What problem are we solving?"),
    (Emphasis, "  02  Why → What → How"),
    (Plain, "      Every task needs a problem statement, proposed solution, and design details."),
    (Emphasis, "  03  Chesterton's Fence"),
    (Plain, "      Never modify code without first understanding why it exists. Measure 3x, cut once."),
    (Emphasis, "  04  No Shortcuts. Ever."),
    (Plain, "      No fallback code. No 'TODO later'. Pure excellence, done right."),
    (Plain, ""),
    (System, "Next: '2' for the stack, or 'menu'."),
];

pub const STACK: StaticBlock = &[
    (Header, "02 / THE STACK"),
    (Plain, ""),
    (Emphasis, "  Tools that play together."),
    (Plain, ""),
    (Plain, "  Claude Code     AI Partner"),
    (Plain, "  Claude Flow     Swarm Orchestration"),
    (Plain, "  RuVector        Pattern Learning"),
    (Plain, "  Archon          Task Management"),
    (Plain, "  vi              Yes, really."),
    (Plain, ""),
    (System, "  ~/meta-landing"),
    (Plain, "  $ mkdir meta-landing && cd meta-landing"),
    (Plain, "  $ cfinit  # npx claude-flow@alpha init --force"),
    (Success, "  ✓ Claude Flow initialized"),
    (Plain, "  $ dsp \"I'm competing in a hackathon...\""),
    (Plain, "  [Claude] I'll conduct a PM interview AND spawn"),
    (Plain, "  research agents in parallel. Let's go."),
    (System, "  > Spawning agent-01: Design Trends Research"),
    (System, "  > Spawning agent-02: Tech Stack Analysis"),
    (System, "  > Spawning agent-03: Workflow Examples"),
    (Plain, ""),
    (System, "Next: '3' for the workflow, or 'menu'."),
];

pub const WORKFLOW: StaticBlock = &[
    (Header, "03 / THE WORKFLOW"),
    (Plain, ""),
    (Emphasis, "  Five steps. No magic."),
    (Plain, "  A disciplined, task-driven approach. Each step has a reason."),
    (Plain, ""),
    (Emphasis, "  [01] Initialize & Plan"),
    (Plain, "       mkdir → cfinit → add MCPs → initial prompt with full context"),
    (Success, "       $ cfinit && dsp 'Here is my challenge...'"),
    (Emphasis, "  [02] PRD → Tasks"),
    (Plain, "       Split requirements into Archon tasks. Each has Why / What / How."),
    (Emphasis, "  [03] Execute with Discipline"),
    (Plain, "       Fetch highest priority. Analyze BEFORE touching code. Plan first."),
    (Emphasis, "  [04] Validate & Learn"),
    (Plain, "       Test it. Get human feedback. (I ask my wife and kids.) Update future tasks."),
    (Emphasis, "  [05] Commit & Continue"),
    (Plain, "       Proper commits after EVERY task. Sequential undo = safety net."),
    (Success, "       $ git commit -m 'feat: task complete'"),
    (Plain, ""),
    (System, "Next: '4' for the proof, or 'menu'."),
];

pub const PROOF: StaticBlock = &[
    (Header, "04 / THE PROOF"),
    (Plain, ""),
    (Emphasis, "  This page is the proof."),
    (Plain, "  Not a mockup. Not a concept. The actual workflow, demonstrated live."),
    (Plain, ""),
    (Success, "     45    Minutes to build"),
    (Success, "      3    Research agents spawned"),
    (Success, "      6    Interview questions answered"),
    (Success, "    236ms  First contentful paint"),
    (Plain, ""),
    (Header, "  // THE ACTUAL INITIAL PROMPT"),
    (Plain, "  \"I'm competing in a mini hackathon challenge today. 'Meta Landing Page' -"),
    (Plain, "  Build a beautiful landing page that showcases how YOU build beautiful frontends"),
    (Plain, "  with your AI coding agent. The twist? You're using that very workflow to build it...\""),
    (Plain, ""),
    (Header, "  Q: SECRET WEAPON?"),
    (Plain, "  \"I start with clear goals. What is the visitor intended to learn?"),
    (Plain, "  What job is the page hiring? ALWAYS start with Why.\""),
    (Header, "  Q: RECOVERY STRATEGY?"),
    (Plain, "  \"I commit after every successful task. This gives sequential undo capabilities."),
    (Plain, "  If AI gives mediocre output? Iterate with specificity. I also ask my wife and kids.\""),
    (Plain, ""),
    (Header, "  STACK DECISION (BASED ON RESEARCH AGENTS)"),
    (Plain, "  Next.js 15 · Tailwind CSS · Framer Motion · TypeScript · Playwright Tests"),
    (Plain, ""),
    (System, "Next: '5' to contact the sysop, or 'menu'."),
];

pub const CONTACT: StaticBlock = &[
    (Header, "05 / CONTACT THE SYSOP"),
    (Plain, ""),
    (Emphasis, "  The secret? There is no secret."),
    (Plain, ""),
    (Plain, "  Start with clear goals. Use tools that work together."),
    (Plain, "  Commit after every win. Get human feedback. Learn and iterate."),
    (Plain, "  That's it. That's the whole thing."),
    (Plain, ""),
    (Plain, "  built by   Robert E. Lee"),
    (Plain, "  with       Claude Code + Claude Flow"),
    (Success, "  email      robert@agidreams.us"),
    (Plain, "  date       January 2026"),
    (Plain, ""),
    (System, "Type 'menu' to go back."),
];

pub const ABOUT: StaticBlock = &[
    (Header, "ABOUT THIS TERMINAL"),
    (Plain, ""),
    (Plain, "  Same story, third telling: this one is a terminal."),
    (Plain, "  Every screen is pre-written; every command is an exact match."),
    (Plain, "  No network. No cookies. Nothing you type leaves this screen."),
    (Plain, ""),
    (System, "Type 'menu' to go back."),
];

pub const RABBIT: StaticBlock = &[
    (Success, "Wake up, visitor..."),
    (Success, "The landing page has you..."),
    (Success, "Follow the white rabbit."),
    (Plain, ""),
    (Emphasis, "      (\\_/)"),
    (Emphasis, "      (o.o)"),
    (Emphasis, "      (> <)"),
    (Plain, ""),
    (Plain, "  Knock, knock."),
    (Plain, "  Every shortcut you didn't take is a rabbit hole you didn't fall into."),
    (Plain, ""),
    (System, "Type 'menu' to climb back out."),
];

pub const FAREWELL: StaticBlock = &[
    (System, "Logging out..."),
    (Error, "Connection to meta-landing closed."),
    (Plain, ""),
    (Emphasis, "Just kidding. There's nowhere to go. This is a landing page."),
    (System, "Type 'menu' to keep exploring."),
];

/// Names printed by `ls`
pub const LS_LISTING: &str = "philosophy  stack  workflow  proof  contact  about";
pub const WHOAMI: &str = "guest@meta-landing";
pub const PWD: &str = "/home/guest/meta-landing";
pub const UNAME: &str = "MetaLanding 1.0.0-why #1 SMP PREEMPT_DYNAMIC x86_64 Flow/Linux";
