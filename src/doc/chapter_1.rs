/*!
# Commands

Commands are not case sensitive. Type names (`NUMBER`, `TEXT`,
`CONDITION`, `TYPE`, `CHARACTER`), `TRUE`, `FALSE`, `IS`, `JUMP` after
`IF`, and `END` must be written in capitals.
*/

#[path = "commands/ask.rs"]
#[allow(non_snake_case)]
pub mod ASK;

#[path = "commands/askfor.rs"]
#[allow(non_snake_case)]
pub mod ASKFOR;

#[path = "commands/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "commands/equals.rs"]
#[allow(non_snake_case)]
pub mod EQUALS;

#[path = "commands/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "commands/increment.rs"]
#[allow(non_snake_case)]
pub mod INCREMENT;

#[path = "commands/is.rs"]
#[allow(non_snake_case)]
pub mod IS;

#[path = "commands/jump.rs"]
#[allow(non_snake_case)]
pub mod JUMP;

#[path = "commands/math.rs"]
#[allow(non_snake_case)]
pub mod SUM;

#[path = "commands/not.rs"]
#[allow(non_snake_case)]
pub mod NOT;

#[path = "commands/printnum.rs"]
#[allow(non_snake_case)]
pub mod PRINTNUM;

#[path = "commands/reserve.rs"]
#[allow(non_snake_case)]
pub mod RESERVE;

#[path = "commands/say.rs"]
#[allow(non_snake_case)]
pub mod SAY;
