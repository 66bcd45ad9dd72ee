/*!
# `END`

## Purpose
Stop the program.

## Remarks
`END` must be in capitals and takes no arguments. Rows after it are
only run if something jumps to them.

## Example
```text
1 SAY "DONE"
2 END
3 SAY "NEVER SEEN"
```

*/
