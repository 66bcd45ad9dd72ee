/*!
# `JUMP <row>`

## Purpose
Continue execution at `<row>`.

## Remarks
Jumping to a row that doesn't exist moves forward to the next row that
does, unless the largest row number is reached first.

## Example
```text
1 JUMP 3
2 SAY "THIS WILL NOT PRINT"
3 SAY "THIS WILL PRINT"
4 END
```

*/
