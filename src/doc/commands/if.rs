/*!
# `IF <condition> JUMP <row>`

## Purpose
Jump to `<row>` when the condition is true.

## Remarks
`JUMP` must follow the condition. When the condition is false the rest
of the row is ignored and execution continues with the next row.

## Example
```text
1 RESERVE I _ NUMBER
2 INCREMENT I
3 PRINTNUM I
4 IF NOT EQUALS I 3 JUMP 2
5 END
RUN
123
```

*/
